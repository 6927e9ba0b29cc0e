//! Error types for validation, provider and session failures
//!
//! Messages here are for logs. What the user sees is chosen in the
//! presentation layer, which never echoes provider text.

use thiserror::Error;

/// Missing or malformed user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid phone number: {masked}")]
    InvalidPhoneNumber { masked: String },
}

/// Failure talking to the verification provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Verification provider did not answer within {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Verification provider unreachable: {message}")]
    Transport { message: String },

    #[error("Verification provider rejected the request (HTTP {status}): {message}")]
    Rejected {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("Unexpected verification provider response: {message}")]
    InvalidResponse { message: String },
}

/// Missing, expired or unreadable session state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No pending verification in session")]
    NoPendingVerification,

    #[error("Session storage failure: {message}")]
    Storage { message: String },
}
