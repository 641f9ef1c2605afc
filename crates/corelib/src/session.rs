//! Question-and-answer driver.
//!
//! A [`Session`] asks one membership question per generated subset, in
//! generator order, then reconstructs the index. Where the answers come from
//! is up to the [`AnswerSource`]: a console, a script, or an oracle that
//! knows the secret.

use std::collections::VecDeque;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::partition::{reconstruct, Partition};
use crate::range::IndexRange;

/// "Is your index a member of subset `number`?"
#[derive(Debug, Clone, Copy)]
pub struct Question<'a> {
    /// 1-based position in the session.
    pub number: usize,
    pub total: usize,
    pub subset: &'a [i64],
}

pub trait AnswerSource {
    fn answer(&mut self, question: &Question<'_>) -> Result<bool>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub guess: i64,
    pub answers: Vec<bool>,
}

#[derive(Debug, Clone)]
pub struct Session {
    partition: Partition,
    strict: bool,
}

impl Session {
    pub fn new(range: IndexRange) -> Self {
        Self {
            partition: Partition::new(range),
            strict: true,
        }
    }

    pub fn from_config(cfg: &SessionConfig) -> Result<Self> {
        let range = cfg.range()?;
        if cfg.exceeds_max_span() {
            warn!(
                lower = cfg.lower,
                upper = cfg.upper,
                max_span = cfg.max_span,
                "session range exceeds max span"
            );
        }
        Ok(Self::new(range).with_strict(cfg.strict))
    }

    /// With `strict` off, guesses past the upper bound are returned as-is.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn run<A: AnswerSource + ?Sized>(&self, source: &mut A) -> Result<Outcome> {
        let total = self.partition.len();
        let mut answers = Vec::with_capacity(total);
        for (i, subset) in self.partition.subsets().iter().enumerate() {
            let question = Question {
                number: i + 1,
                total,
                subset,
            };
            let answer = source
                .answer(&question)
                .with_context(|| format!("collecting answer for subset {}", question.number))?;
            debug!(subset = question.number, answer, "answer recorded");
            answers.push(answer);
        }

        let guess = if self.strict {
            self.partition.reconstruct(&answers)?
        } else {
            reconstruct(
                self.partition.subsets(),
                &answers,
                self.partition.range().lower(),
            )?
        };
        info!(guess, questions = total, "session finished");
        Ok(Outcome { guess, answers })
    }
}

/// Replays a fixed answer sequence.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    queue: VecDeque<bool>,
}

impl ScriptedAnswers {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            queue: answers.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn answer(&mut self, question: &Question<'_>) -> Result<bool> {
        self.queue
            .pop_front()
            .ok_or_else(|| anyhow!("scripted answers exhausted at question {}", question.number))
    }
}

/// Answers truthfully for a known secret.
#[derive(Debug, Clone, Copy)]
pub struct OracleAnswers {
    secret: i64,
}

impl OracleAnswers {
    pub fn new(secret: i64) -> Self {
        Self { secret }
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }
}

impl AnswerSource for OracleAnswers {
    fn answer(&mut self, question: &Question<'_>) -> Result<bool> {
        Ok(question.subset.binary_search(&self.secret).is_ok())
    }
}
