//! Collaborator traits injected into the verification ledger

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Out-of-band transport delivering one-time codes to a phone
#[async_trait]
pub trait CodeSender: Send + Sync {
    /// Deliver a verification code, returning the provider's message id
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String>;
}

/// Source of one-time verification codes
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Maps an owner's aggregate signals to a fraud severity
pub trait FraudScoringPolicy: Send + Sync {
    /// # Arguments
    ///
    /// * `total_reports` - Sum of report counts across the owner's records
    /// * `phone_update_count` - Phone mutations across the owner's records
    fn score(&self, total_reports: u64, phone_update_count: u64) -> u64;
}
