//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{ProviderError, SessionError, ValidationError};

use thiserror::Error;

/// Errors a sign-in request can end in.
///
/// Configuration problems are not part of this taxonomy: they are
/// `otp_shared::ConfigError` and only occur before the server starts.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl DomainError {
    /// Whether the user can fix this by editing the form
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
