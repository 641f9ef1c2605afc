//! Console answer source: prompts on a writer, reads replies line by line.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use subsift_core::answer::parse_answer;
use subsift_core::{AnswerSource, Question};

pub struct ConsoleAnswers<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleAnswers<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Ask until the reply is a recognised yes or no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            write!(self.writer, "{prompt}")?;
            self.writer.flush()?;
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("reading answer")?;
            if read == 0 {
                bail!("input closed before an answer was given");
            }
            match parse_answer(&line) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.writer, "Please answer 'yes' or 'no'.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> AnswerSource for ConsoleAnswers<R, W> {
    fn answer(&mut self, question: &Question<'_>) -> Result<bool> {
        self.confirm(&format!(
            "Is your index in subset {}? (yes/no): ",
            question.number
        ))
    }
}
