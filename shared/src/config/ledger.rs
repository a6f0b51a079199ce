//! Verification ledger configuration
//!
//! Governs the phone number format accepted for registration, the
//! reverification windows, the one-time code gate and the fraud scoring
//! policy used when summarizing an owner.

use serde::{Deserialize, Serialize};

/// Default accepted phone format: `+65 XXXX XXXX`
pub const DEFAULT_PHONE_PATTERN: &str = r"^\+65 \d{4} \d{4}$";

/// Whether reverification requires the record to be due first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReverifyPolicy {
    /// Any record may be reverified at any time
    #[default]
    Unconditional,
    /// Only records inside the warning window may be reverified
    RequireDue,
}

/// Fraud scoring policy selection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FraudPolicyConfig {
    /// Fraud level equals the owner's total report count
    ReportCount,
    /// Linear combination of reports and phone updates
    Weighted {
        report_weight: u32,
        update_weight: u32,
    },
}

impl Default for FraudPolicyConfig {
    fn default() -> Self {
        FraudPolicyConfig::ReportCount
    }
}

/// Ledger rules
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Regular expression a candidate number must match
    pub phone_pattern: String,

    /// Days between a verification and the reverify-by deadline
    pub reverification_window_days: i64,

    /// Days before the deadline at which a record becomes due
    pub reverification_warning_days: i64,

    /// Number of digits in an issued code
    pub code_length: usize,

    /// Minutes an issued code stays valid
    pub code_expiration_minutes: i64,

    /// Reverification gate
    pub reverify_policy: ReverifyPolicy,

    /// Fraud scoring policy
    pub fraud_policy: FraudPolicyConfig,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            phone_pattern: DEFAULT_PHONE_PATTERN.to_string(),
            reverification_window_days: 10,
            reverification_warning_days: 3,
            code_length: 6,
            code_expiration_minutes: 5,
            reverify_policy: ReverifyPolicy::default(),
            fraud_policy: FraudPolicyConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LedgerConfig::default();
        assert_eq!(config.phone_pattern, DEFAULT_PHONE_PATTERN);
        assert_eq!(config.reverification_window_days, 10);
        assert_eq!(config.reverify_policy, ReverifyPolicy::Unconditional);
        assert_eq!(config.fraud_policy, FraudPolicyConfig::ReportCount);
    }

    #[test]
    fn test_weighted_policy_deserializes() {
        let config: LedgerConfig = serde_json::from_str(
            r#"{"fraud_policy": {"kind": "weighted", "report_weight": 2, "update_weight": 1},
                "reverify_policy": "require_due"}"#,
        )
        .unwrap();
        assert_eq!(
            config.fraud_policy,
            FraudPolicyConfig::Weighted { report_weight: 2, update_weight: 1 }
        );
        assert_eq!(config.reverify_policy, ReverifyPolicy::RequireDue);
        assert_eq!(config.code_expiration_minutes, 5);
    }
}
