//! Store for pending verification codes awaiting confirmation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::PendingVerification;
use crate::errors::DomainError;

/// Storage for issued-but-unconsumed verification codes
///
/// At most one pending verification is live per candidate number: storing a
/// new one supersedes any prior pending for the same number.
#[async_trait]
pub trait PendingVerificationStore: Send + Sync {
    /// Store a pending verification, superseding any prior one for its number
    async fn put(&self, pending: PendingVerification) -> Result<(), DomainError>;

    /// Look up a live pending verification without consuming it
    async fn get(&self, id: Uuid) -> Result<Option<PendingVerification>, DomainError>;

    /// Remove and return a live pending verification
    ///
    /// Returns `Ok(None)` if it was already consumed or superseded.
    async fn take(&self, id: Uuid) -> Result<Option<PendingVerification>, DomainError>;
}
