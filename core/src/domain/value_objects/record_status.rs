//! Derived verification state of a phone record.

use serde::{Deserialize, Serialize};

/// Verification state, derived on read and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// More time remains than the warning window
    Verified,
    /// Inside the warning window or past `reverify_by`
    DueForReverification,
}

impl RecordStatus {
    pub fn is_due(self) -> bool {
        matches!(self, RecordStatus::DueForReverification)
    }
}
