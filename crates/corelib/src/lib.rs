//! Core library: subset partitioning of integer ranges, index reconstruction
//! from yes/no membership answers, and the session driver used by the CLI.

pub mod answer;
pub mod bits;
pub mod config;
pub mod errors;
pub mod partition;
pub mod range;
pub mod session;

pub use config::SessionConfig;
pub use errors::PartitionError;
pub use partition::{generate, reconstruct, reconstruct_in, Partition};
pub use range::IndexRange;
pub use session::{AnswerSource, OracleAnswers, Outcome, Question, ScriptedAnswers, Session};

/// Version helper for CLI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
