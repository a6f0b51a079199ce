//! Redis-backed pending verification store
//!
//! Layout:
//! - `{prefix}:pending:{id}` holds the JSON-encoded pending verification
//! - `{prefix}:pending_number:{number}` holds the id of the live pending for
//!   that number, so a new request can supersede the previous one
//!
//! Both keys expire with the code, so abandoned attempts clean themselves up.
//! The index is swapped with `SET ... GET` and cleared with a compare-and-delete
//! script, so concurrent requests for one number leave a single live entry.

use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use uuid::Uuid;

use ng_core::domain::entities::PendingVerification;
use ng_core::errors::DomainError;
use ng_core::repositories::PendingVerificationStore;
use ng_shared::phone::mask_phone_number;

use super::redis_client::RedisClient;
use crate::InfrastructureError;

/// Pending verification store on Redis
#[derive(Clone)]
pub struct RedisPendingStore {
    client: RedisClient,
}

impl RedisPendingStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn pending_key(&self, id: Uuid) -> String {
        self.client.make_key(&format!("pending:{}", id))
    }

    fn number_key(&self, number: &str) -> String {
        self.client.make_key(&format!("pending_number:{}", number))
    }

    fn decode(payload: Option<String>) -> Result<Option<PendingVerification>, InfrastructureError> {
        payload
            .map(|json| serde_json::from_str::<PendingVerification>(&json))
            .transpose()
            .map_err(InfrastructureError::from)
    }
}

/// Time to keep a pending entry around, never less than one millisecond
fn ttl_for(pending: &PendingVerification) -> Duration {
    (pending.expires_at - Utc::now())
        .to_std()
        .unwrap_or(Duration::ZERO)
        .max(Duration::from_millis(1))
}

#[async_trait]
impl PendingVerificationStore for RedisPendingStore {
    async fn put(&self, pending: PendingVerification) -> Result<(), DomainError> {
        let ttl = ttl_for(&pending);
        let number_key = self.number_key(&pending.candidate_number);
        let id = pending.id.to_string();

        // The entry goes in before the index points at it; the index swap
        // hands back exactly one predecessor per writer.
        let payload = serde_json::to_string(&pending).map_err(InfrastructureError::from)?;
        self.client
            .set_with_ttl(&self.pending_key(pending.id), &payload, ttl)
            .await?;
        let previous = self.client.swap_with_ttl(&number_key, &id, ttl).await?;

        if let Some(previous_id) = previous.filter(|p| *p != id).and_then(|p| Uuid::parse_str(&p).ok()) {
            self.client.delete(&self.pending_key(previous_id)).await?;
            tracing::debug!(
                phone = %mask_phone_number(&pending.candidate_number),
                superseded = %previous_id,
                "Superseded pending verification"
            );
        }

        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<PendingVerification>, DomainError> {
        let payload = self.client.get(&self.pending_key(id)).await?;
        Ok(Self::decode(payload)?)
    }

    async fn take(&self, id: Uuid) -> Result<Option<PendingVerification>, DomainError> {
        let payload = self.client.take(&self.pending_key(id)).await?;
        let pending = Self::decode(payload)?;

        if let Some(p) = &pending {
            self.client
                .delete_if_equals(&self.number_key(&p.candidate_number), &id.to_string())
                .await?;
        }

        Ok(pending)
    }
}
