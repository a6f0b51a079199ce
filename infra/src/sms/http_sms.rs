//! HTTP SMS provider
//!
//! Delivers codes through a Twilio-style REST messaging API: a form-encoded
//! `POST {api_url}/Accounts/{account_id}/Messages.json` authenticated with
//! HTTP basic auth, answering with a JSON body carrying the message `sid`.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

use ng_core::services::ledger::CodeSender;
use ng_shared::config::SmsConfig;
use ng_shared::phone::mask_phone_number;

use crate::InfrastructureError;

/// Text of the message carrying a verification code
pub fn verification_message(code: &str, ttl_minutes: i64) -> String {
    let unit = if ttl_minutes == 1 { "minute" } else { "minutes" };
    format!(
        "Your NumGuard verification code is {}. It expires in {} {}.",
        code, ttl_minutes, unit
    )
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

/// SMS sender backed by an HTTP messaging API
pub struct HttpSmsSender {
    client: reqwest::Client,
    config: SmsConfig,
    code_ttl_minutes: i64,
}

impl HttpSmsSender {
    /// Create a sender, validating the credentials are present
    ///
    /// `code_ttl_minutes` is the code lifetime quoted in each message.
    pub fn new(config: SmsConfig, code_ttl_minutes: i64) -> Result<Self, InfrastructureError> {
        if config.account_id.is_empty() || config.auth_token.is_empty() {
            return Err(InfrastructureError::Config(
                "SMS account_id and auth_token are required for the http provider".to_string(),
            ));
        }
        if !config.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "SMS from_number must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "HTTP SMS sender initialized with from number: {}",
            mask_phone_number(&config.from_number)
        );

        Ok(Self {
            client,
            config,
            code_ttl_minutes,
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            self.config.api_url.trim_end_matches('/'),
            self.config.account_id
        )
    }

    /// Build the provider request for one code
    pub fn build_request(&self, phone: &str, code: &str) -> Result<reqwest::Request, InfrastructureError> {
        let to: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        let body = verification_message(code, self.code_ttl_minutes);

        Ok(self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_id, Some(&self.config.auth_token))
            .form(&[
                ("To", to.as_str()),
                ("From", self.config.from_number.as_str()),
                ("Body", body.as_str()),
            ])
            .build()?)
    }

    async fn deliver(&self, phone: &str, code: &str) -> Result<String, InfrastructureError> {
        let request = self.build_request(phone, code)?;
        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Sms(format!(
                "Provider responded with {}: {}",
                status, detail
            )));
        }

        let message: MessageResponse = response.json().await?;
        Ok(message.sid)
    }
}

#[async_trait]
impl CodeSender for HttpSmsSender {
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String> {
        match self.deliver(phone, code).await {
            Ok(sid) => {
                info!(
                    target: "sms_service",
                    provider = "http",
                    phone = %mask_phone_number(phone),
                    message_id = %sid,
                    "Verification code sent"
                );
                Ok(sid)
            }
            Err(e) => {
                error!(
                    target: "sms_service",
                    provider = "http",
                    phone = %mask_phone_number(phone),
                    error = %e,
                    "Failed to send verification code"
                );
                Err(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SmsConfig {
        SmsConfig {
            provider: "http".to_string(),
            api_url: "https://sms.example.test/2010-04-01/".to_string(),
            account_id: "AC123".to_string(),
            auth_token: "secret".to_string(),
            from_number: "+6560000000".to_string(),
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn test_requires_credentials() {
        let missing = SmsConfig {
            auth_token: String::new(),
            ..config()
        };
        assert!(matches!(HttpSmsSender::new(missing, 5), Err(InfrastructureError::Config(_))));

        let bad_from = SmsConfig {
            from_number: "6560000000".to_string(),
            ..config()
        };
        assert!(HttpSmsSender::new(bad_from, 5).is_err());
    }

    #[test]
    fn test_build_request() {
        let sender = HttpSmsSender::new(config(), 5).unwrap();
        let request = sender.build_request("+65 8939 5160", "863509").unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://sms.example.test/2010-04-01/Accounts/AC123/Messages.json"
        );
        let auth = request.headers().get(reqwest::header::AUTHORIZATION).unwrap();
        assert!(auth.to_str().unwrap().starts_with("Basic "));

        let body = std::str::from_utf8(request.body().unwrap().as_bytes().unwrap()).unwrap();
        assert!(body.contains("To=%2B6589395160"));
        assert!(body.contains("863509"));
    }

    #[test]
    fn test_message_quotes_configured_lifetime() {
        let sender = HttpSmsSender::new(config(), 15).unwrap();
        let request = sender.build_request("+65 8939 5160", "863509").unwrap();

        let body = std::str::from_utf8(request.body().unwrap().as_bytes().unwrap()).unwrap();
        assert!(body.contains("expires+in+15+minutes"));
        assert!(!body.contains("in+5+minutes"));

        assert_eq!(
            verification_message("863509", 1),
            "Your NumGuard verification code is 863509. It expires in 1 minute."
        );
    }
}
