//! MySQL implementation of the PhoneRecordRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ng_core::domain::entities::PhoneRecord;
use ng_core::errors::DomainError;
use ng_core::repositories::PhoneRecordRepository;

/// MySQL implementation of PhoneRecordRepository
pub struct MySqlPhoneRecordRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPhoneRecordRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to PhoneRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<PhoneRecord, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;

        Ok(PhoneRecord {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid record UUID: {}", e) })?,
            owner_id: row
                .try_get("owner_id")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get owner_id: {}", e) })?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get phone_number: {}", e) })?,
            verified_at: row
                .try_get::<DateTime<Utc>, _>("verified_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get verified_at: {}", e) })?,
            reverify_by: row
                .try_get::<DateTime<Utc>, _>("reverify_by")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get reverify_by: {}", e) })?,
            report_count: row
                .try_get("report_count")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get report_count: {}", e) })?,
            update_count: row
                .try_get("update_count")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get update_count: {}", e) })?,
        })
    }
}

#[async_trait]
impl PhoneRecordRepository for MySqlPhoneRecordRepository {
    async fn get(&self, id: Uuid) -> Result<Option<PhoneRecord>, DomainError> {
        let query = r#"
            SELECT id, owner_id, phone_number, verified_at, reverify_by, report_count, update_count
            FROM phone_records
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find phone record: {}", e) })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, record: PhoneRecord) -> Result<PhoneRecord, DomainError> {
        let query = r#"
            INSERT INTO phone_records (
                id, owner_id, phone_number, verified_at, reverify_by, report_count, update_count
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                owner_id = VALUES(owner_id),
                phone_number = VALUES(phone_number),
                verified_at = VALUES(verified_at),
                reverify_by = VALUES(reverify_by),
                report_count = VALUES(report_count),
                update_count = VALUES(update_count)
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(&record.owner_id)
            .bind(&record.phone_number)
            .bind(record.verified_at)
            .bind(record.reverify_by)
            .bind(record.report_count)
            .bind(record.update_count)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to save phone record: {}", e) })?;

        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM phone_records WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to delete phone record: {}", e) })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<PhoneRecord>, DomainError> {
        let query = r#"
            SELECT id, owner_id, phone_number, verified_at, reverify_by, report_count, update_count
            FROM phone_records
            WHERE owner_id = ?
        "#;

        let rows = sqlx::query(query)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to list phone records: {}", e) })?;

        rows.iter().map(Self::row_to_record).collect()
    }
}
