//! Error types for statistics operations

use thiserror::Error;

/// Result type for statistics operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur while computing or preparing statistics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// The statistic is undefined for zero observations.
    #[error("cannot compute {context} of an empty sequence")]
    EmptyInput { context: &'static str },

    /// An input token did not parse as a number (CLI boundary only).
    #[error("invalid number in input: {token:?}")]
    InvalidNumber { token: String },
}
