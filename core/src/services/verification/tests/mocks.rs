//! Mock provider for testing the sign-in service

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::{Channel, PhoneNumber, VerificationHandle, VerificationStatus};
use crate::errors::ProviderError;
use crate::services::verification::VerificationProvider;

// Mock verification provider for testing
pub struct MockProvider {
    pub started: Arc<Mutex<Vec<(String, Channel)>>>,
    pub checked: Arc<Mutex<Vec<(String, String)>>>,
    pub approved_code: String,
    pub should_fail: bool,
    pub delay: Option<Duration>,
}

impl MockProvider {
    pub fn new(approved_code: &str) -> Self {
        Self {
            started: Arc::new(Mutex::new(Vec::new())),
            checked: Arc::new(Mutex::new(Vec::new())),
            approved_code: approved_code.to_string(),
            should_fail: false,
            delay: None,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new("000000")
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new("000000")
        }
    }

    pub fn start_calls(&self) -> Vec<(String, Channel)> {
        self.started.lock().unwrap().clone()
    }

    pub fn check_calls(&self) -> Vec<(String, String)> {
        self.checked.lock().unwrap().clone()
    }

    async fn maybe_wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl VerificationProvider for MockProvider {
    async fn start_verification(
        &self,
        phone: &PhoneNumber,
        channel: Channel,
    ) -> Result<VerificationHandle, ProviderError> {
        self.started
            .lock()
            .unwrap()
            .push((phone.as_str().to_string(), channel));
        self.maybe_wait().await;

        if self.should_fail {
            return Err(ProviderError::Transport {
                message: "connection refused".to_string(),
            });
        }

        Ok(VerificationHandle {
            sid: "VEmock".to_string(),
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
        self.maybe_wait().await;

        if self.should_fail {
            return Err(ProviderError::Rejected {
                status: 500,
                code: None,
                message: "internal error".to_string(),
            });
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
