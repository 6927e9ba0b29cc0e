use serde::Deserialize;
use validator::Validate;

/// Body of `POST /send-otp`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SendCodeForm {
    /// Local number ("5551234") or full E.164 ("+15551234"); formatting
    /// characters are allowed. A missing field deserializes as empty.
    #[serde(default)]
    #[validate(length(max = 32, message = "Phone number is too long"))]
    pub phone: String,
}

/// Body of `POST /verify-otp`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VerifyCodeForm {
    #[serde(default)]
    #[validate(length(max = 16, message = "Verification code is too long"))]
    pub code: String,
}
