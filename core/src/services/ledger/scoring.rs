//! Fraud scoring policies

use std::sync::Arc;

use ng_shared::config::FraudPolicyConfig;

use super::traits::FraudScoringPolicy;

/// Fraud level is the owner's total report count
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportCountPolicy;

impl FraudScoringPolicy for ReportCountPolicy {
    fn score(&self, total_reports: u64, _phone_update_count: u64) -> u64 {
        total_reports
    }
}

/// Linear combination of reports and phone updates
#[derive(Debug, Clone, Copy)]
pub struct WeightedPolicy {
    pub report_weight: u32,
    pub update_weight: u32,
}

impl FraudScoringPolicy for WeightedPolicy {
    fn score(&self, total_reports: u64, phone_update_count: u64) -> u64 {
        total_reports
            .saturating_mul(self.report_weight as u64)
            .saturating_add(phone_update_count.saturating_mul(self.update_weight as u64))
    }
}

/// Build the configured policy
pub fn policy_from_config(config: &FraudPolicyConfig) -> Arc<dyn FraudScoringPolicy> {
    match config {
        FraudPolicyConfig::ReportCount => Arc::new(ReportCountPolicy),
        FraudPolicyConfig::Weighted {
            report_weight,
            update_weight,
        } => Arc::new(WeightedPolicy {
            report_weight: *report_weight,
            update_weight: *update_weight,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_count_ignores_updates() {
        assert_eq!(ReportCountPolicy.score(3, 7), 3);
        assert_eq!(ReportCountPolicy.score(0, 0), 0);
    }

    #[test]
    fn test_weighted_from_config() {
        let policy = policy_from_config(&FraudPolicyConfig::Weighted {
            report_weight: 2,
            update_weight: 1,
        });
        assert_eq!(policy.score(3, 4), 10);
        assert_eq!(policy.score(0, 0), 0);
    }

    #[test]
    fn test_weighted_saturates() {
        let policy = WeightedPolicy {
            report_weight: u32::MAX,
            update_weight: u32::MAX,
        };
        assert_eq!(policy.score(u64::MAX, 1), u64::MAX);
    }
}
