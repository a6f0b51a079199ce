//! Number entry entity backing the `/numbers` CRUD surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the numbers table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberEntry {
    pub id: i64,
    pub name: String,
    pub number: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating or updating an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFields {
    pub name: String,
    pub number: String,
    pub description: Option<String>,
}
