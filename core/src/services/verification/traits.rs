//! Port for the external verification provider

use async_trait::async_trait;

use crate::domain::{Channel, PhoneNumber, VerificationHandle, VerificationStatus};
use crate::errors::ProviderError;

/// External service that generates, delivers and checks one-time codes
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Ask the provider to send a code to `phone` over `channel`
    async fn start_verification(
        &self,
        phone: &PhoneNumber,
        channel: Channel,
    ) -> Result<VerificationHandle, ProviderError>;

    /// Ask the provider whether `code` is the one it sent to `phone`
    async fn check_verification(
        &self,
        phone: &PhoneNumber,
        code: &str,
    ) -> Result<VerificationStatus, ProviderError>;

    /// Provider name for logs
    fn provider_name(&self) -> &str;
}
