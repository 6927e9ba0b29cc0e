//! Twilio Verify v2 wire models

use serde::Deserialize;

/// Reply to `POST /v2/Services/{sid}/Verifications`
#[derive(Debug, Deserialize)]
pub(crate) struct VerificationResponse {
    pub sid: String,
    pub status: String,
    #[serde(default)]
    pub channel: Option<String>,
}

/// Reply to `POST /v2/Services/{sid}/VerificationCheck`
#[derive(Debug, Deserialize)]
pub(crate) struct VerificationCheckResponse {
    pub status: String,
    #[serde(default)]
    pub valid: Option<bool>,
}

/// Error body Twilio attaches to non-2xx replies
#[derive(Debug, Deserialize)]
pub(crate) struct TwilioApiError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub more_info: Option<String>,
}
