//! MySQL implementation of the NumberRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ng_core::domain::entities::{NumberEntry, NumberFields};
use ng_core::errors::DomainError;
use ng_core::repositories::NumberRepository;

const SELECT_COLUMNS: &str = "SELECT id, name, number, description, created_at, updated_at FROM numbers";

/// MySQL implementation of NumberRepository
pub struct MySqlNumberRepository {
    pool: MySqlPool,
}

impl MySqlNumberRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: &sqlx::mysql::MySqlRow) -> Result<NumberEntry, DomainError> {
        let column = |e: sqlx::Error| DomainError::Internal {
            message: format!("Failed to read numbers row: {}", e),
        };

        Ok(NumberEntry {
            id: row.try_get("id").map_err(column)?,
            name: row.try_get("name").map_err(column)?,
            number: row.try_get("number").map_err(column)?,
            description: row.try_get("description").map_err(column)?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(column)?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at").map_err(column)?,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<NumberEntry>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find number: {}", e) })?;

        row.as_ref().map(Self::row_to_entry).transpose()
    }
}

#[async_trait]
impl NumberRepository for MySqlNumberRepository {
    async fn find_all(&self) -> Result<Vec<NumberEntry>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to list numbers: {}", e) })?;

        rows.iter().map(Self::row_to_entry).collect()
    }

    async fn create(&self, fields: NumberFields) -> Result<NumberEntry, DomainError> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO numbers (name, number, description, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&fields.name)
        .bind(&fields.number)
        .bind(&fields.description)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::Internal { message: format!("Failed to create number: {}", e) })?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id).await?.ok_or_else(|| DomainError::Internal {
            message: format!("Inserted number {} could not be read back", id),
        })
    }

    async fn update(&self, id: i64, fields: NumberFields) -> Result<Option<NumberEntry>, DomainError> {
        // MySQL reports unchanged rows as unaffected, so existence is checked by reading back
        sqlx::query("UPDATE numbers SET name = ?, number = ?, description = ?, updated_at = ? WHERE id = ?")
            .bind(&fields.name)
            .bind(&fields.number)
            .bind(&fields.description)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to update number: {}", e) })?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM numbers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to delete number: {}", e) })?;

        Ok(result.rows_affected() > 0)
    }
}
