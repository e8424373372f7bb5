//! Error types for the selection layer.

use thiserror::Error;

/// Result type for selection operations.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Errors raised while interpreting selection input.
///
/// The accumulator itself has no failure modes; these only come from
/// validating what the user typed before it reaches the accumulator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Bulk-select count was zero, negative or not a number.
    #[error("invalid selection count {input:?}: expected a positive integer")]
    InvalidCount { input: String },
}
