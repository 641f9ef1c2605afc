//! Yes/no answer vocabulary.

use anyhow::{anyhow, Result};

/// Accepted affirmative replies (compared after trimming and lowercasing).
pub const AFFIRMATIVE: &[&str] = &["sí", "si", "s", "yes", "y"];
/// Accepted negative replies.
pub const NEGATIVE: &[&str] = &["no", "n"];

/// `Some(true)` for an affirmative reply, `Some(false)` for a negative one,
/// `None` for anything else.
pub fn parse_answer(input: &str) -> Option<bool> {
    let reply = input.trim().to_lowercase();
    if AFFIRMATIVE.contains(&reply.as_str()) {
        Some(true)
    } else if NEGATIVE.contains(&reply.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Parse a comma-separated list such as `y,n,yes`. Blank input is an empty list.
pub fn parse_answer_list(input: &str) -> Result<Vec<bool>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .enumerate()
        .map(|(i, token)| {
            parse_answer(token)
                .ok_or_else(|| anyhow!("answer #{} '{}' is not yes or no", i + 1, token.trim()))
        })
        .collect()
}

pub fn format_answer(answer: bool) -> &'static str {
    if answer {
        "yes"
    } else {
        "no"
    }
}
