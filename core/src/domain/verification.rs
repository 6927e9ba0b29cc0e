//! Verification state of a sign-in attempt

use serde::{Deserialize, Serialize};

use super::phone_number::PhoneNumber;

pub use otp_shared::Channel;

/// The phone number awaiting a code, one per session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingVerification {
    pub phone: PhoneNumber,
}

impl PendingVerification {
    pub fn new(phone: PhoneNumber) -> Self {
        Self { phone }
    }
}

/// Outcome of checking a code with the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Approved,
    Rejected,
}

impl VerificationStatus {
    /// Interpret a provider status string. Only `approved` counts as success.
    pub fn from_provider_status(status: &str) -> Self {
        if status.eq_ignore_ascii_case("approved") {
            VerificationStatus::Approved
        } else {
            VerificationStatus::Rejected
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, VerificationStatus::Approved)
    }
}

/// Provider-side record of a started verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationHandle {
    /// Provider identifier of the verification
    pub sid: String,
    /// Provider status right after creation (normally `pending`)
    pub status: String,
    /// Channel the provider used
    pub channel: Channel,
}

/// Where a session stands in the sign-in flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInState {
    Unauthenticated,
    CodeSent,
    Authenticated,
}

impl SignInState {
    /// Derive the state from what the session currently holds.
    ///
    /// A pending number wins over an earlier authentication: starting a new
    /// send-code moves the session back to `CodeSent`.
    pub fn from_session(
        pending: Option<&PhoneNumber>,
        authenticated: Option<&PhoneNumber>,
    ) -> Self {
        match (pending, authenticated) {
            (Some(_), _) => SignInState::CodeSent,
            (None, Some(_)) => SignInState::Authenticated,
            (None, None) => SignInState::Unauthenticated,
        }
    }
}

impl std::fmt::Display for SignInState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignInState::Unauthenticated => write!(f, "unauthenticated"),
            SignInState::CodeSent => write!(f, "code_sent"),
            SignInState::Authenticated => write!(f, "authenticated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_approved_is_success() {
        assert_eq!(
            VerificationStatus::from_provider_status("approved"),
            VerificationStatus::Approved
        );
        assert!(VerificationStatus::from_provider_status("APPROVED").is_approved());
        for status in ["pending", "canceled", "failed", "expired", ""] {
            assert_eq!(
                VerificationStatus::from_provider_status(status),
                VerificationStatus::Rejected
            );
        }
    }

    #[test]
    fn test_pending_verification_rejects_invalid_phone() {
        let pending = PendingVerification::new(PhoneNumber::from_e164("+15551234").unwrap());
        let json = serde_json::to_string(&pending).unwrap();
        assert_eq!(json, r#"{"phone":"+15551234"}"#);
        assert_eq!(serde_json::from_str::<PendingVerification>(&json).unwrap(), pending);

        assert!(serde_json::from_str::<PendingVerification>(r#"{"phone":"5551234"}"#).is_err());
        assert!(serde_json::from_str::<PendingVerification>(r#""+15551234""#).is_err());
    }

    #[test]
    fn test_sign_in_state_transitions() {
        let phone = PhoneNumber::from_e164("+15551234").unwrap();

        assert_eq!(SignInState::from_session(None, None), SignInState::Unauthenticated);
        assert_eq!(SignInState::from_session(Some(&phone), None), SignInState::CodeSent);
        assert_eq!(SignInState::from_session(None, Some(&phone)), SignInState::Authenticated);
        assert_eq!(
            SignInState::from_session(Some(&phone), Some(&phone)),
            SignInState::CodeSent
        );
    }
}
