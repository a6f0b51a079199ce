//! Configuration for the verification ledger

use chrono::Duration;
use ng_shared::config::{LedgerConfig, ReverifyPolicy};
use ng_shared::phone::PhoneFormat;

use crate::domain::entities::{
    DEFAULT_EXPIRATION_MINUTES, DEFAULT_REVERIFICATION_WINDOW_DAYS, DEFAULT_WARNING_WINDOW_DAYS,
};
use crate::errors::{DomainError, DomainResult};

/// Longest accepted reverification window
pub const MAX_REVERIFICATION_WINDOW_DAYS: i64 = 3650;
/// Longest accepted code lifetime
pub const MAX_CODE_EXPIRATION_MINUTES: i64 = 24 * 60;

/// Runtime rules of the verification ledger
#[derive(Debug, Clone)]
pub struct LedgerServiceConfig {
    /// Format a candidate number must match
    pub phone_format: PhoneFormat,
    /// Interval between a verification and its reverify-by deadline
    pub reverification_window: Duration,
    /// Lead time before the deadline during which a record is due
    pub warning_window: Duration,
    /// How long an issued code stays valid
    pub code_ttl: Duration,
    /// Whether reverification requires the record to be due
    pub reverify_policy: ReverifyPolicy,
}

impl Default for LedgerServiceConfig {
    fn default() -> Self {
        Self {
            phone_format: PhoneFormat::default(),
            reverification_window: Duration::days(DEFAULT_REVERIFICATION_WINDOW_DAYS),
            warning_window: Duration::days(DEFAULT_WARNING_WINDOW_DAYS),
            code_ttl: Duration::minutes(DEFAULT_EXPIRATION_MINUTES),
            reverify_policy: ReverifyPolicy::default(),
        }
    }
}

impl LedgerServiceConfig {
    /// Build from the application's ledger section
    ///
    /// Fails when the pattern does not compile, a window falls outside its
    /// bounds, or the warning window is not shorter than the reverification
    /// window.
    pub fn from_config(config: &LedgerConfig) -> DomainResult<Self> {
        let phone_format = PhoneFormat::new(&config.phone_pattern).map_err(|e| DomainError::Validation {
            message: format!("Invalid phone pattern {:?}: {}", config.phone_pattern, e),
        })?;

        let reverification_window = bounded(
            "reverification_window_days",
            config.reverification_window_days,
            1,
            MAX_REVERIFICATION_WINDOW_DAYS,
            Duration::try_days,
        )?;
        let warning_window = bounded(
            "reverification_warning_days",
            config.reverification_warning_days,
            0,
            config.reverification_window_days - 1,
            Duration::try_days,
        )?;
        let code_ttl = bounded(
            "code_expiration_minutes",
            config.code_expiration_minutes,
            1,
            MAX_CODE_EXPIRATION_MINUTES,
            Duration::try_minutes,
        )?;

        tracing::debug!(
            phone_pattern = %phone_format.pattern(),
            window_days = config.reverification_window_days,
            warning_days = config.reverification_warning_days,
            code_ttl_minutes = config.code_expiration_minutes,
            event = "ledger_config_loaded",
            "Loaded ledger rules"
        );

        Ok(Self {
            phone_format,
            reverification_window,
            warning_window,
            code_ttl,
            reverify_policy: config.reverify_policy,
        })
    }

    pub fn with_reverify_policy(mut self, policy: ReverifyPolicy) -> Self {
        self.reverify_policy = policy;
        self
    }
}

fn bounded(
    field: &str,
    value: i64,
    min: i64,
    max: i64,
    to_duration: fn(i64) -> Option<Duration>,
) -> DomainResult<Duration> {
    if value < min || value > max {
        return Err(DomainError::Validation {
            message: format!("{} must be between {} and {}, got {}", field, min, max, value),
        });
    }
    to_duration(value).ok_or_else(|| DomainError::Validation {
        message: format!("{} is out of range: {}", field, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config() {
        let config = LedgerServiceConfig::from_config(&LedgerConfig::default()).unwrap();
        assert_eq!(config.reverification_window, Duration::days(10));
        assert_eq!(config.warning_window, Duration::days(3));
        assert_eq!(config.code_ttl, Duration::minutes(5));
        assert!(config.phone_format.matches("+65 8939 5160"));
        assert_eq!(config.phone_format.pattern(), LedgerConfig::default().phone_pattern);
    }

    #[test]
    fn test_rejects_bad_pattern() {
        let ledger = LedgerConfig {
            phone_pattern: "[".to_string(),
            ..LedgerConfig::default()
        };
        assert!(matches!(
            LedgerServiceConfig::from_config(&ledger),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_window() {
        let ledger = LedgerConfig {
            reverification_window_days: 0,
            ..LedgerConfig::default()
        };
        assert!(LedgerServiceConfig::from_config(&ledger).is_err());
    }

    #[test]
    fn test_rejects_window_too_large_for_duration() {
        for days in [MAX_REVERIFICATION_WINDOW_DAYS + 1, i64::MAX / 2, i64::MAX] {
            let ledger = LedgerConfig {
                reverification_window_days: days,
                ..LedgerConfig::default()
            };
            assert!(matches!(
                LedgerServiceConfig::from_config(&ledger),
                Err(DomainError::Validation { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_code_lifetime_too_large() {
        let ledger = LedgerConfig {
            code_expiration_minutes: i64::MAX,
            ..LedgerConfig::default()
        };
        assert!(matches!(
            LedgerServiceConfig::from_config(&ledger),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_rejects_warning_not_shorter_than_window() {
        for warning in [10, 11, i64::MAX] {
            let ledger = LedgerConfig {
                reverification_window_days: 10,
                reverification_warning_days: warning,
                ..LedgerConfig::default()
            };
            assert!(matches!(
                LedgerServiceConfig::from_config(&ledger),
                Err(DomainError::Validation { .. })
            ));
        }
    }

    #[test]
    fn test_accepts_largest_bounds() {
        let ledger = LedgerConfig {
            reverification_window_days: MAX_REVERIFICATION_WINDOW_DAYS,
            reverification_warning_days: MAX_REVERIFICATION_WINDOW_DAYS - 1,
            code_expiration_minutes: MAX_CODE_EXPIRATION_MINUTES,
            ..LedgerConfig::default()
        };
        let config = LedgerServiceConfig::from_config(&ledger).unwrap();
        assert_eq!(config.reverification_window, Duration::days(MAX_REVERIFICATION_WINDOW_DAYS));
        assert_eq!(config.code_ttl, Duration::hours(24));
    }
}
