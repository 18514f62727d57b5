//! Feedback error model.

use thiserror::Error;

/// Result type used across the attendant domain.
pub type FeedbackResult<T> = Result<T, FeedbackError>;

/// The only failure the attendant can produce.
///
/// Keep this focused on deterministic domain failures; there is exactly one
/// in this domain, raised by [`Attendant::produce_feedback`] and surfaced
/// directly to the caller (never recovered internally).
///
/// [`Attendant::produce_feedback`]: crate::Attendant::produce_feedback
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// No input is pending, or the pending input is empty.
    #[error("blocked: empty input")]
    EmptyInput,
}
