//! Mock code sender for development and testing.
//!
//! Logs the code instead of delivering it.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use ng_core::services::ledger::CodeSender;
use ng_shared::phone::mask_phone_number;

/// Log-only code sender
#[derive(Clone, Default)]
pub struct MockCodeSender {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockCodeSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sender that rejects every delivery
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CodeSender for MockCodeSender {
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String> {
        let masked_phone = mask_phone_number(phone);

        if self.simulate_failure {
            warn!(provider = "mock", phone = %masked_phone, "Mock code sender simulating failure");
            return Err("Simulated SMS sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "sms_service",
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            code = code,
            count = count,
            "Verification code sent (mock)"
        );

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_send_success() {
        let sender = MockCodeSender::new();

        let message_id = sender.send_code("+65 8939 5160", "123456").await.unwrap();

        assert!(message_id.starts_with("mock_"));
        assert_eq!(sender.get_message_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_simulated_failure() {
        let sender = MockCodeSender::failing();

        assert!(sender.send_code("+65 8939 5160", "123456").await.is_err());
        assert_eq!(sender.get_message_count(), 0);
    }
}
