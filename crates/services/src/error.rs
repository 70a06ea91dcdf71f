//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::QuizError;

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
