//! Phone record entity: one verified phone number registered under an owner.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default reverification window (10 days)
pub const DEFAULT_REVERIFICATION_WINDOW_DAYS: i64 = 10;

/// Default warning window before `reverify_by` (3 days)
pub const DEFAULT_WARNING_WINDOW_DAYS: i64 = 3;

/// A registered phone number and its verification state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Owning entity (company or user), opaque to the ledger
    pub owner_id: String,

    /// Phone number in the configured regional format
    pub phone_number: String,

    /// Timestamp of the last successful verification
    pub verified_at: DateTime<Utc>,

    /// Deadline by which the number must be reverified
    pub reverify_by: DateTime<Utc>,

    /// Number of suspicion reports filed against this number
    pub report_count: u32,

    /// Number of phone mutations (registration counts as one)
    pub update_count: u32,
}

impl PhoneRecord {
    /// Creates a freshly verified record
    ///
    /// # Arguments
    ///
    /// * `owner_id` - The owning entity
    /// * `phone_number` - The confirmed phone number
    /// * `now` - Verification timestamp
    /// * `window` - Reverification window, must be positive
    pub fn new(owner_id: String, phone_number: String, now: DateTime<Utc>, window: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            phone_number,
            verified_at: now,
            reverify_by: now + window,
            report_count: 0,
            update_count: 1,
        }
    }

    /// Marks the number as reverified at `now`
    ///
    /// Reports survive reverification; the update counter is bumped.
    pub fn reverify(&mut self, now: DateTime<Utc>, window: Duration) {
        self.verified_at = now;
        self.reverify_by = now + window;
        self.update_count = self.update_count.saturating_add(1);
    }

    /// Records one suspicion report
    pub fn add_report(&mut self) {
        self.report_count = self.report_count.saturating_add(1);
    }

    /// Time left until `reverify_by` (negative once overdue)
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        self.reverify_by - now
    }

    /// Whether the record has entered the warning window
    ///
    /// Due means strictly less time remains than the warning window, so a
    /// record sitting exactly on the boundary is still considered verified.
    pub fn is_due(&self, now: DateTime<Utc>, warning_window: Duration) -> bool {
        now > self.reverify_by - warning_window
    }

    /// Whole days until `reverify_by`, floored
    pub fn days_until_reverification(&self, now: DateTime<Utc>) -> i64 {
        let millis = self.remaining(now).num_milliseconds();
        millis.div_euclid(Duration::days(1).num_milliseconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(now: DateTime<Utc>) -> PhoneRecord {
        PhoneRecord::new(
            "acme".to_string(),
            "+65 8939 5160".to_string(),
            now,
            Duration::days(DEFAULT_REVERIFICATION_WINDOW_DAYS),
        )
    }

    #[test]
    fn test_new_record() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let record = sample(now);

        assert_eq!(record.verified_at, now);
        assert_eq!(record.reverify_by, now + Duration::days(10));
        assert_eq!(record.report_count, 0);
        assert_eq!(record.update_count, 1);
        assert!(record.reverify_by > record.verified_at);
    }

    #[test]
    fn test_due_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let record = sample(now);
        let warning = Duration::days(DEFAULT_WARNING_WINDOW_DAYS);

        let boundary = record.reverify_by - warning;
        assert!(!record.is_due(boundary, warning));
        assert!(record.is_due(boundary + Duration::milliseconds(1), warning));
        assert!(!record.is_due(now, warning));
    }

    #[test]
    fn test_reverify_keeps_reports() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut record = sample(now);
        record.add_report();
        record.add_report();

        let later = now + Duration::days(8);
        record.reverify(later, Duration::days(10));

        assert_eq!(record.verified_at, later);
        assert_eq!(record.reverify_by, later + Duration::days(10));
        assert_eq!(record.report_count, 2);
        assert_eq!(record.update_count, 2);
    }

    #[test]
    fn test_days_until_reverification_floors() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let record = sample(now);

        assert_eq!(record.days_until_reverification(now), 10);
        assert_eq!(record.days_until_reverification(now + Duration::milliseconds(1)), 9);
        assert_eq!(record.days_until_reverification(now + Duration::days(10)), 0);
        assert_eq!(
            record.days_until_reverification(now + Duration::days(10) + Duration::hours(1)),
            -1
        );
    }
}
