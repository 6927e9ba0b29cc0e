//! Sign-in service implementation

use std::future::Future;
use std::sync::Arc;

use otp_shared::VerificationConfig;

use crate::domain::PhoneNumber;
use crate::errors::{DomainResult, ProviderError, SessionError, ValidationError};

use super::traits::VerificationProvider;
use super::types::{SendCodeResult, VerifyCodeResult};

/// Sign-in service sequencing normalization and provider calls
///
/// The service holds no per-user state. The caller owns the pending phone
/// number (the HTTP layer keeps it in the session) and passes it back in.
pub struct SignInService<P: VerificationProvider> {
    /// Provider that delivers and checks codes
    provider: Arc<P>,
    /// Flow configuration
    config: VerificationConfig,
}

impl<P: VerificationProvider> SignInService<P> {
    /// Create a new sign-in service
    ///
    /// # Arguments
    ///
    /// * `provider` - Verification provider implementation
    /// * `config` - Default country code, channel and provider timeout
    pub fn new(provider: Arc<P>, config: VerificationConfig) -> Self {
        Self { provider, config }
    }

    /// Turn form input into an E.164 number
    ///
    /// Fails with a validation error for empty or malformed input. Nothing is
    /// sent to the provider.
    pub fn normalize_phone(&self, raw: &str) -> DomainResult<PhoneNumber> {
        let phone = PhoneNumber::parse(raw, &self.config.default_country_code).map_err(|e| {
            tracing::warn!(error = %e, event = "invalid_phone_input", "Rejected phone number input");
            e
        })?;

        Ok(phone)
    }

    /// Start a verification for an already normalized number
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - The provider accepted the request and is
    ///   delivering the code
    /// * `Err(DomainError::Provider)` - Network failure, provider rejection or
    ///   timeout; the user may retry
    pub async fn send_code(&self, phone: &PhoneNumber) -> DomainResult<SendCodeResult> {
        let channel = self.config.channel;

        tracing::info!(
            phone = %phone.masked(),
            channel = %channel,
            provider = self.provider.provider_name(),
            event = "verification_start",
            "Starting phone verification"
        );

        let handle = self
            .bounded("start_verification", self.provider.start_verification(phone, channel))
            .await?;

        tracing::info!(
            phone = %phone.masked(),
            sid = %handle.sid,
            status = %handle.status,
            event = "verification_started",
            "Verification code requested"
        );

        Ok(SendCodeResult {
            phone: phone.clone(),
            handle,
        })
    }

    /// Check a submitted code against the pending number
    ///
    /// Checks run in this order, and the provider is only called when both
    /// pass:
    /// 1. `code` must be non-empty (validation error otherwise)
    /// 2. a pending number must exist (session error otherwise)
    pub async fn verify_code(
        &self,
        pending: Option<&PhoneNumber>,
        code: &str,
    ) -> DomainResult<VerifyCodeResult> {
        let code = code.trim();
        if code.is_empty() {
            tracing::warn!(event = "empty_code", "Verification attempted without a code");
            return Err(ValidationError::RequiredField {
                field: "code".to_string(),
            }
            .into());
        }

        let phone = pending.ok_or_else(|| {
            tracing::warn!(
                event = "no_pending_verification",
                "Verification attempted without a pending phone number"
            );
            SessionError::NoPendingVerification
        })?;

        let status = self
            .bounded("check_verification", self.provider.check_verification(phone, code))
            .await?;

        if status.is_approved() {
            tracing::info!(
                phone = %phone.masked(),
                event = "verification_approved",
                "Verification code approved"
            );
        } else {
            tracing::warn!(
                phone = %phone.masked(),
                event = "verification_rejected",
                "Verification code rejected"
            );
        }

        Ok(VerifyCodeResult {
            phone: phone.clone(),
            status,
        })
    }

    /// Run a provider call under the configured timeout
    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        let limit = self.config.timeout;
        let result = match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout {
                seconds: limit.as_secs(),
            }),
        };

        if let Err(e) = &result {
            tracing::error!(
                operation,
                provider = self.provider.provider_name(),
                error = %e,
                event = "provider_call_failed",
                "Verification provider call failed"
            );
        }

        result
    }
}
