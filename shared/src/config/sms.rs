//! Out-of-band code delivery configuration

use serde::{Deserialize, Serialize};

/// SMS provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SmsConfig {
    /// Provider name ("mock" or "http")
    pub provider: String,

    /// Base URL of the HTTP provider's messaging API
    pub api_url: String,

    /// Provider account identifier
    pub account_id: String,

    /// Provider auth token
    pub auth_token: String,

    /// Sender number
    pub from_number: String,

    /// Timeout for provider requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_url: String::from("https://api.twilio.com/2010-04-01"),
            account_id: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            request_timeout_secs: 30,
        }
    }
}

impl SmsConfig {
    /// Whether the mock (log-only) sender is selected
    pub fn is_mock(&self) -> bool {
        self.provider.eq_ignore_ascii_case("mock")
    }
}
