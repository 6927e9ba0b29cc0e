//! Types for sign-in service results

use crate::domain::{PhoneNumber, VerificationHandle, VerificationStatus};

/// Result of starting a verification
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// The number the code was sent to
    pub phone: PhoneNumber,
    /// The provider's record of the verification
    pub handle: VerificationHandle,
}

/// Result of checking a code
#[derive(Debug, Clone)]
pub struct VerifyCodeResult {
    /// The number the code was checked against
    pub phone: PhoneNumber,
    /// Provider verdict
    pub status: VerificationStatus,
}

impl VerifyCodeResult {
    pub fn is_approved(&self) -> bool {
        self.status.is_approved()
    }
}
