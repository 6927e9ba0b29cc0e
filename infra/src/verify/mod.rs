//! Verification provider module
//!
//! The provider generates, delivers and checks the one-time codes. This
//! module talks to Twilio Verify over its REST API; an in-memory mock is
//! available for tests behind the `mock-services` feature.

mod models;
mod twilio;

#[cfg(any(test, feature = "mock-services"))]
mod mock;

pub use otp_shared::config::DEFAULT_VERIFY_BASE_URL;
pub use twilio::TwilioVerifyClient;

#[cfg(any(test, feature = "mock-services"))]
pub use mock::MockVerificationProvider;
