//! Verification service module for SMS-based sign-in
//!
//! This module provides the sign-in workflow on top of an external
//! verification provider:
//! - Phone number normalization against the configured country code
//! - Starting a verification (the provider generates and delivers the code)
//! - Checking a submitted code
//! - A time bound on every provider call

mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::SignInService;
pub use traits::VerificationProvider;
pub use types::{SendCodeResult, VerifyCodeResult};
