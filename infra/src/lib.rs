//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `otp_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Verify**: Twilio Verify v2 REST client implementing
//!   `VerificationProvider`
//!
//! ## Features
//!
//! - `mock-services`: Enable the in-memory mock provider for testing

use thiserror::Error;

/// Verification provider module - Twilio Verify and test doubles
pub mod verify;

pub use verify::{TwilioVerifyClient, DEFAULT_VERIFY_BASE_URL};

#[cfg(any(test, feature = "mock-services"))]
pub use verify::MockVerificationProvider;

/// Errors raised while building infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
