//! In-memory implementation of PhoneRecordRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::PhoneRecord;
use crate::errors::DomainError;

use super::r#trait::PhoneRecordRepository;

/// In-memory phone record repository
#[derive(Clone, Default)]
pub struct InMemoryPhoneRecordRepository {
    records: Arc<RwLock<HashMap<Uuid, PhoneRecord>>>,
}

impl InMemoryPhoneRecordRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PhoneRecordRepository for InMemoryPhoneRecordRepository {
    async fn get(&self, id: Uuid) -> Result<Option<PhoneRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn put(&self, record: PhoneRecord) -> Result<PhoneRecord, DomainError> {
        let mut records = self.records.write().await;
        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&id).is_some())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<PhoneRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn record(owner: &str) -> PhoneRecord {
        PhoneRecord::new(
            owner.to_string(),
            "+65 9123 4567".to_string(),
            Utc::now(),
            Duration::days(10),
        )
    }

    #[tokio::test]
    async fn test_put_is_upsert() {
        let repo = InMemoryPhoneRecordRepository::new();
        let mut r = record("acme");
        repo.put(r.clone()).await.unwrap();

        r.add_report();
        repo.put(r.clone()).await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.get(r.id).await.unwrap().unwrap().report_count, 1);
    }

    #[tokio::test]
    async fn test_list_by_owner_filters() {
        let repo = InMemoryPhoneRecordRepository::new();
        repo.put(record("acme")).await.unwrap();
        repo.put(record("acme")).await.unwrap();
        repo.put(record("globex")).await.unwrap();

        assert_eq!(repo.list_by_owner("acme").await.unwrap().len(), 2);
        assert_eq!(repo.list_by_owner("globex").await.unwrap().len(), 1);
        assert!(repo.list_by_owner("initech").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryPhoneRecordRepository::new();
        let r = repo.put(record("acme")).await.unwrap();

        assert!(repo.delete(r.id).await.unwrap());
        assert!(!repo.delete(r.id).await.unwrap());
        assert!(repo.get(r.id).await.unwrap().is_none());
    }
}
