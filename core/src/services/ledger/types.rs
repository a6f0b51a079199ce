//! Types for ledger operation results

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::PhoneRecord;
use crate::domain::value_objects::RecordStatus;

/// Result of a batch removal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalReport {
    /// Ids that resolved and were removed, in request order
    pub removed: Vec<Uuid>,
    /// Ids that did not resolve to a live record
    pub not_found: Vec<Uuid>,
}

/// A record together with its derived state at read time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    #[serde(flatten)]
    pub record: PhoneRecord,
    pub status: RecordStatus,
    pub days_until_reverification: i64,
}
