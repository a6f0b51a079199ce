//! In-memory implementation of NumberRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{NumberEntry, NumberFields};
use crate::errors::DomainError;

use super::r#trait::NumberRepository;

#[derive(Default)]
struct NumberTable {
    next_id: i64,
    rows: BTreeMap<i64, NumberEntry>,
}

/// In-memory numbers table with auto-increment ids starting at 1
#[derive(Clone, Default)]
pub struct InMemoryNumberRepository {
    table: Arc<RwLock<NumberTable>>,
}

impl InMemoryNumberRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NumberRepository for InMemoryNumberRepository {
    async fn find_all(&self) -> Result<Vec<NumberEntry>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create(&self, fields: NumberFields) -> Result<NumberEntry, DomainError> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let now = Utc::now();
        let entry = NumberEntry {
            id: table.next_id,
            name: fields.name,
            number: fields.number,
            description: fields.description,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn update(&self, id: i64, fields: NumberFields) -> Result<Option<NumberEntry>, DomainError> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|entry| {
            entry.name = fields.name;
            entry.number = fields.number;
            entry.description = fields.description;
            entry.updated_at = Utc::now();
            entry.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }
}
