//! Phone record repository trait defining the interface for record persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::PhoneRecord;
use crate::errors::DomainError;

/// Repository trait for PhoneRecord persistence operations
///
/// The ledger treats storage as opaque: it reads, writes and deletes whole
/// records by id and lists them per owner. Implementations must make `put`
/// an upsert keyed by `record.id`.
#[async_trait]
pub trait PhoneRecordRepository: Send + Sync {
    /// Find a record by its ID
    ///
    /// # Returns
    /// * `Ok(Some(PhoneRecord))` - Record found
    /// * `Ok(None)` - No record with the given ID
    /// * `Err(DomainError)` - Storage error occurred
    async fn get(&self, id: Uuid) -> Result<Option<PhoneRecord>, DomainError>;

    /// Insert or replace a record
    async fn put(&self, record: PhoneRecord) -> Result<PhoneRecord, DomainError>;

    /// Delete a record by its ID
    ///
    /// # Returns
    /// * `Ok(true)` - Record was deleted
    /// * `Ok(false)` - No record with the given ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// All live records registered under an owner, in no particular order
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<PhoneRecord>, DomainError>;
}
