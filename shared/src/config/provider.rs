//! Verification provider (Twilio Verify) configuration

use secrecy::Secret;
use std::time::Duration;

/// Default Twilio Verify API origin
pub const DEFAULT_VERIFY_BASE_URL: &str = "https://verify.twilio.com";

/// Credentials and endpoint of the verification provider
#[derive(Debug)]
pub struct ProviderConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: Secret<String>,
    /// Twilio Verify Service SID
    pub service_sid: String,
    /// API origin, overridable for tests and regional edges
    pub base_url: String,
    /// Timeout for a single API request
    pub request_timeout: Duration,
}

impl ProviderConfig {
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        service_sid: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: Secret::new(auth_token.into()),
            service_sid: service_sid.into(),
            base_url: DEFAULT_VERIFY_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(super::verification::DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
