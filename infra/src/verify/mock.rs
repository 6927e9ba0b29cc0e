//! Mock Verification Provider Implementation
//!
//! An in-memory stand-in for Twilio Verify used by tests. It approves one
//! fixed code and records every call so tests can assert on what the
//! provider would have received.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;

use otp_core::{
    Channel, PhoneNumber, ProviderError, VerificationHandle, VerificationProvider,
    VerificationStatus,
};

/// Mock verification provider for development and testing
///
/// This implementation:
/// - Approves exactly one configured code
/// - Records started verifications and checks
/// - Can simulate provider outages
#[derive(Clone)]
pub struct MockVerificationProvider {
    approved_code: String,
    started: Arc<Mutex<Vec<(String, Channel)>>>,
    checked: Arc<Mutex<Vec<(String, String)>>>,
    simulate_failure: Arc<AtomicBool>,
}

impl MockVerificationProvider {
    /// Create a mock that approves `approved_code` for any number
    pub fn new(approved_code: impl Into<String>) -> Self {
        Self {
            approved_code: approved_code.into(),
            started: Arc::new(Mutex::new(Vec::new())),
            checked: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Numbers and channels passed to `start_verification`, in call order
    pub fn started(&self) -> Vec<(String, Channel)> {
        self.started.lock().unwrap().clone()
    }

    /// Numbers and codes passed to `check_verification`, in call order
    pub fn checked(&self) -> Vec<(String, String)> {
        self.checked.lock().unwrap().clone()
    }

    fn outage(&self) -> Option<ProviderError> {
        self.simulate_failure
            .load(Ordering::SeqCst)
            .then(|| ProviderError::Transport {
                message: "simulated provider outage".to_string(),
            })
    }
}

impl Default for MockVerificationProvider {
    fn default() -> Self {
        Self::new("000000")
    }
}

#[async_trait]
impl VerificationProvider for MockVerificationProvider {
    async fn start_verification(
        &self,
        phone: &PhoneNumber,
        channel: Channel,
    ) -> Result<VerificationHandle, ProviderError> {
        self.started
            .lock()
            .unwrap()
            .push((phone.as_str().to_string(), channel));

        if let Some(error) = self.outage() {
            return Err(error);
        }

        info!(phone = %phone.masked(), channel = %channel, "[MOCK] Verification started");

        Ok(VerificationHandle {
            sid: format!("VEmock{:04}", self.started().len()),
            status: "pending".to_string(),
            channel,
        })
    }

    async fn check_verification(
        &self,
        phone: &PhoneNumber,
        code: &str,
    ) -> Result<VerificationStatus, ProviderError> {
        self.checked
            .lock()
            .unwrap()
            .push((phone.as_str().to_string(), code.to_string()));

        if let Some(error) = self.outage() {
            return Err(error);
        }

        if code == self.approved_code {
            Ok(VerificationStatus::Approved)
        } else {
            Ok(VerificationStatus::Rejected)
        }
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> PhoneNumber {
        PhoneNumber::from_e164("+15551234").unwrap()
    }

    #[tokio::test]
    async fn test_records_started_verifications() {
        let provider = MockVerificationProvider::default();

        let handle = provider
            .start_verification(&phone(), Channel::Sms)
            .await
            .unwrap();

        assert_eq!(handle.status, "pending");
        assert_eq!(provider.started(), vec![("+15551234".to_string(), Channel::Sms)]);
    }

    #[tokio::test]
    async fn test_only_configured_code_is_approved() {
        let provider = MockVerificationProvider::new("424242");

        let approved = provider.check_verification(&phone(), "424242").await.unwrap();
        let rejected = provider.check_verification(&phone(), "000000").await.unwrap();

        assert_eq!(approved, VerificationStatus::Approved);
        assert_eq!(rejected, VerificationStatus::Rejected);
        assert_eq!(provider.checked().len(), 2);
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let provider = MockVerificationProvider::default();
        provider.set_simulate_failure(true);

        let result = provider.start_verification(&phone(), Channel::Sms).await;

        assert!(matches!(result, Err(ProviderError::Transport { .. })));
    }

    #[tokio::test]
    #[should_panic]
    async fn test_poisoned_call_log_panics() {
        let provider = MockVerificationProvider::default();
        let checked = Arc::clone(&provider.checked);
        let _ = std::thread::spawn(move || {
            let _guard = checked.lock().unwrap();
            panic!("poison the call log");
        })
        .join();

        let _ = provider.check_verification(&phone(), "000000").await;
    }
}
