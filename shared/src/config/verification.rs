//! Sign-in flow configuration

use std::time::Duration;

use crate::types::Channel;

/// Default upper bound for one provider call, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings of the send-code / verify-code flow
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Country calling code prepended to numbers without a leading `+`
    /// (digits only, stored without `+`)
    pub default_country_code: String,
    /// Delivery channel requested from the provider
    pub channel: Channel,
    /// Upper bound for a single provider call
    pub timeout: Duration,
}

impl VerificationConfig {
    pub fn new(default_country_code: impl Into<String>) -> Self {
        let code: String = default_country_code.into();
        Self {
            default_country_code: code.trim().trim_start_matches('+').to_string(),
            channel: Channel::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
