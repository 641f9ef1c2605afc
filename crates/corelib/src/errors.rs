use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("invalid range [{lower}, {upper}]: lower bound must be below upper bound")]
    InvalidRange { lower: i64, upper: i64 },
    #[error("answer count {answers} does not match subset count {subsets}")]
    LengthMismatch { subsets: usize, answers: usize },
    #[error("index {value} lies outside [{lower}, {upper}]")]
    OutOfRange { value: i64, lower: i64, upper: i64 },
    #[error("reconstructed index does not fit in a 64-bit signed integer")]
    Overflow,
}
