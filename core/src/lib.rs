//! # OTP Sign-In Core
//!
//! Domain layer for phone-number sign-in with one-time codes.
//! This crate contains the domain types, the error taxonomy, the
//! verification provider port and the sign-in service that sequences
//! normalization, provider calls and result interpretation.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Channel, PendingVerification, PhoneNumber, SignInState, VerificationHandle,
    VerificationStatus,
};
pub use errors::{DomainError, DomainResult, ProviderError, SessionError, ValidationError};
pub use services::{SendCodeResult, SignInService, VerificationProvider, VerifyCodeResult};
