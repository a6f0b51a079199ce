//! Per-owner suspicion aggregate.

use serde::{Deserialize, Serialize};

/// Suspicion summary for one owner, computed from its live records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSuspicionSummary {
    /// The owner the summary describes
    pub owner_id: String,

    /// Severity produced by the configured fraud scoring policy
    pub fraud_level: u64,

    /// Total phone mutations across the owner's live records
    pub phone_update_count: u64,

    /// Number of live records
    pub record_count: usize,

    /// Sum of report counts across the owner's live records
    pub total_reports: u64,
}

impl OwnerSuspicionSummary {
    /// Summary for an owner with no records
    pub fn empty(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            fraud_level: 0,
            phone_update_count: 0,
            record_count: 0,
            total_reports: 0,
        }
    }
}
