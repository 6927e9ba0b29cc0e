//! Domain layer containing value objects and verification state.

pub mod phone_number;
pub mod verification;

// Re-export commonly used domain types
pub use phone_number::PhoneNumber;
pub use verification::{
    Channel, PendingVerification, SignInState, VerificationHandle, VerificationStatus,
};
