//! SMS Module
//!
//! Out-of-band delivery of verification codes.
//!
//! - **Mock**: logs the code, for development
//! - **HTTP**: Twilio-style REST messaging API via `reqwest`

use std::sync::Arc;

use ng_core::services::ledger::CodeSender;
use ng_shared::config::SmsConfig;

use crate::InfrastructureError;

pub mod http_sms;
pub mod mock_sms;

pub use http_sms::HttpSmsSender;
pub use mock_sms::MockCodeSender;

/// Create a code sender based on configuration
///
/// `code_ttl_minutes` is the lifetime quoted to recipients and should match
/// the ledger's code expiration.
pub fn create_code_sender(
    config: &SmsConfig,
    code_ttl_minutes: i64,
) -> Result<Arc<dyn CodeSender>, InfrastructureError> {
    if config.is_mock() {
        tracing::info!("Using mock code sender; codes are only logged");
        return Ok(Arc::new(MockCodeSender::new()));
    }

    match config.provider.to_ascii_lowercase().as_str() {
        "http" | "twilio" => Ok(Arc::new(HttpSmsSender::new(config.clone(), code_ttl_minutes)?)),
        other => Err(InfrastructureError::Config(format!(
            "Unknown SMS provider: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_code_sender() {
        assert!(create_code_sender(&SmsConfig::default(), 5).is_ok());

        let unknown = SmsConfig {
            provider: "carrier-pigeon".to_string(),
            ..SmsConfig::default()
        };
        assert!(matches!(
            create_code_sender(&unknown, 5),
            Err(InfrastructureError::Config(_))
        ));

        // http without credentials is rejected up front
        let http = SmsConfig {
            provider: "http".to_string(),
            ..SmsConfig::default()
        };
        assert!(create_code_sender(&http, 5).is_err());
    }
}
