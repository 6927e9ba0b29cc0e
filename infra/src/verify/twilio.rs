//! Twilio Verify Service Implementation
//!
//! This module starts and checks verifications through the Twilio Verify v2
//! REST API. Twilio generates the code, delivers it and keeps it; nothing
//! code-related is stored on our side.
//!
//! ## Features
//!
//! - HTTP Basic auth with the account SID and auth token
//! - Per-request timeout on the HTTP client
//! - Twilio error bodies mapped onto `ProviderError`
//! - Security: Phone number masking in logs, codes never logged

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use otp_core::{
    Channel, PhoneNumber, ProviderError, VerificationHandle, VerificationProvider,
    VerificationStatus,
};
use otp_shared::{phone, ProviderConfig};

use super::models::{TwilioApiError, VerificationCheckResponse, VerificationResponse};
use crate::InfrastructureError;

/// Twilio Verify client
pub struct TwilioVerifyClient {
    http: reqwest::Client,
    account_sid: String,
    auth_token: Secret<String>,
    verifications_url: String,
    verification_check_url: String,
    request_timeout: Duration,
}

impl TwilioVerifyClient {
    /// Create a new Twilio Verify client
    pub fn new(config: &ProviderConfig) -> Result<Self, InfrastructureError> {
        if config.account_sid.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "Twilio account SID must not be empty".to_string(),
            ));
        }
        if config.service_sid.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "Twilio Verify service SID must not be empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let service_url = format!(
            "{}/v2/Services/{}",
            config.base_url.trim_end_matches('/'),
            config.service_sid
        );

        info!(
            base_url = %config.base_url,
            timeout_secs = config.request_timeout.as_secs(),
            "Twilio Verify client initialized"
        );

        Ok(Self {
            http,
            account_sid: config.account_sid.clone(),
            auth_token: Secret::new(config.auth_token.expose_secret().clone()),
            verifications_url: format!("{}/Verifications", service_url),
            verification_check_url: format!("{}/VerificationCheck", service_url),
            request_timeout: config.request_timeout,
        })
    }

    /// POST a form and decode the JSON reply
    ///
    /// Non-2xx replies come back as `Err((status, api_error))` so callers can
    /// treat specific statuses differently before mapping to `ProviderError`.
    async fn post_form<T: DeserializeOwned>(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<Result<T, (u16, Option<TwilioApiError>)>, ProviderError> {
        let response = self
            .http
            .post(url)
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(form)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.request_error(e))?;

        if !status.is_success() {
            let api_error = serde_json::from_str::<TwilioApiError>(&body).ok();
            return Ok(Err((status.as_u16(), api_error)));
        }

        serde_json::from_str::<T>(&body)
            .map(Ok)
            .map_err(|e| {
                error!(error = %e, "Failed to parse Twilio Verify response");
                ProviderError::InvalidResponse {
                    message: e.to_string(),
                }
            })
    }

    fn request_error(&self, e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }
        } else {
            ProviderError::Transport {
                message: e.to_string(),
            }
        }
    }
}

fn rejected(status: u16, api_error: Option<TwilioApiError>) -> ProviderError {
    let (code, message) = match api_error {
        Some(api_error) => {
            warn!(
                status,
                code = ?api_error.code,
                more_info = api_error.more_info.as_deref().unwrap_or("-"),
                "Twilio Verify returned an error"
            );
            // Twilio quotes the `To` parameter in some messages
            let message = api_error
                .message
                .as_deref()
                .map(phone::mask_phone_numbers_in)
                .unwrap_or_else(|| "no error message".to_string());
            (api_error.code, message)
        }
        None => {
            warn!(status, "Twilio Verify returned an error without a body");
            (None, "no error body".to_string())
        }
    };

    ProviderError::Rejected {
        status,
        code,
        message,
    }
}

#[async_trait]
impl VerificationProvider for TwilioVerifyClient {
    async fn start_verification(
        &self,
        phone: &PhoneNumber,
        channel: Channel,
    ) -> Result<VerificationHandle, ProviderError> {
        debug!(phone = %phone.masked(), channel = %channel, "Creating Twilio verification");

        let reply = self
            .post_form::<VerificationResponse>(
                &self.verifications_url,
                &[("To", phone.as_str()), ("Channel", channel.as_str())],
            )
            .await?;

        let verification = reply.map_err(|(status, api_error)| rejected(status, api_error))?;

        let channel = verification
            .channel
            .as_deref()
            .and_then(|c| c.parse::<Channel>().ok())
            .unwrap_or(channel);

        Ok(VerificationHandle {
            sid: verification.sid,
            status: verification.status,
            channel,
        })
    }

    async fn check_verification(
        &self,
        phone: &PhoneNumber,
        code: &str,
    ) -> Result<VerificationStatus, ProviderError> {
        debug!(phone = %phone.masked(), "Checking Twilio verification");

        let reply = self
            .post_form::<VerificationCheckResponse>(
                &self.verification_check_url,
                &[("To", phone.as_str()), ("Code", code)],
            )
            .await?;

        match reply {
            Ok(check) => {
                debug!(status = %check.status, valid = ?check.valid, "Twilio verification check answered");
                Ok(VerificationStatus::from_provider_status(&check.status))
            }
            // No pending verification at Twilio: expired, already approved or never started
            Err((404, _)) => {
                warn!(phone = %phone.masked(), "No pending Twilio verification for number");
                Ok(VerificationStatus::Rejected)
            }
            Err((status, api_error)) => Err(rejected(status, api_error)),
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio Verify"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_service_urls() {
        let config = ProviderConfig::new("AC123", "token", "VA456")
            .with_base_url("http://localhost:9999/");
        let client = TwilioVerifyClient::new(&config).unwrap();

        assert_eq!(
            client.verifications_url,
            "http://localhost:9999/v2/Services/VA456/Verifications"
        );
        assert_eq!(
            client.verification_check_url,
            "http://localhost:9999/v2/Services/VA456/VerificationCheck"
        );
    }

    #[test]
    fn test_new_rejects_empty_service_sid() {
        let config = ProviderConfig::new("AC123", "token", " ");
        assert!(matches!(
            TwilioVerifyClient::new(&config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[test]
    fn test_rejected_without_body() {
        let error = rejected(503, None);
        assert_eq!(
            error,
            ProviderError::Rejected {
                status: 503,
                code: None,
                message: "no error body".to_string(),
            }
        );
    }

    #[test]
    fn test_rejected_masks_quoted_number() {
        let api_error = TwilioApiError {
            code: Some(60200),
            message: Some("Invalid parameter `To`: +15551234".to_string()),
            more_info: None,
        };

        let error = rejected(400, Some(api_error));

        assert!(!error.to_string().contains("+15551234"));
        assert!(error.to_string().contains("+****1234"));
    }
}
