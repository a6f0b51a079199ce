//! In-memory implementation of PendingVerificationStore

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::PendingVerification;
use crate::errors::DomainError;

use super::r#trait::PendingVerificationStore;

#[derive(Default)]
struct PendingState {
    by_id: HashMap<Uuid, PendingVerification>,
    // candidate number -> live pending id
    by_number: HashMap<String, Uuid>,
}

/// In-memory pending verification store
///
/// Expired entries are not evicted; the ledger checks `expires_at` itself.
#[derive(Clone, Default)]
pub struct InMemoryPendingStore {
    state: Arc<RwLock<PendingState>>,
}

impl InMemoryPendingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live pending verifications
    pub async fn len(&self) -> usize {
        self.state.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.by_id.is_empty()
    }
}

#[async_trait]
impl PendingVerificationStore for InMemoryPendingStore {
    async fn put(&self, pending: PendingVerification) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if let Some(previous) = state
            .by_number
            .insert(pending.candidate_number.clone(), pending.id)
        {
            state.by_id.remove(&previous);
        }
        state.by_id.insert(pending.id, pending);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<PendingVerification>, DomainError> {
        let state = self.state.read().await;
        Ok(state.by_id.get(&id).cloned())
    }

    async fn take(&self, id: Uuid) -> Result<Option<PendingVerification>, DomainError> {
        let mut state = self.state.write().await;
        let pending = state.by_id.remove(&id);
        if let Some(p) = &pending {
            if state.by_number.get(&p.candidate_number) == Some(&id) {
                state.by_number.remove(&p.candidate_number);
            }
        }
        Ok(pending)
    }
}
