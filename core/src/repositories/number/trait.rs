//! Number repository trait for the `/numbers` compatibility table.

use async_trait::async_trait;

use crate::domain::entities::{NumberEntry, NumberFields};
use crate::errors::DomainError;

/// Repository trait for NumberEntry persistence operations
#[async_trait]
pub trait NumberRepository: Send + Sync {
    /// All entries, ordered by id
    async fn find_all(&self) -> Result<Vec<NumberEntry>, DomainError>;

    /// Insert a new entry and return it with its generated id
    async fn create(&self, fields: NumberFields) -> Result<NumberEntry, DomainError>;

    /// Replace the fields of an entry
    ///
    /// # Returns
    /// * `Ok(Some(NumberEntry))` - The updated entry
    /// * `Ok(None)` - No entry with the given id
    async fn update(&self, id: i64, fields: NumberFields) -> Result<Option<NumberEntry>, DomainError>;

    /// Delete an entry, returning whether it existed
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
