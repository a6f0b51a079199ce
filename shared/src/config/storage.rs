//! Storage backend selection

use serde::{Deserialize, Serialize};

/// Backend holding phone records and compatibility number entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordBackend {
    #[default]
    Memory,
    Mysql,
}

/// Backend holding pending verification codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingBackend {
    #[default]
    Memory,
    Redis,
}

/// Storage configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub records: RecordBackend,
    pub pending: PendingBackend,
}
