use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use ng_core::domain::entities::PendingVerification;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestCodeRequest {
    #[validate(length(min = 1, max = 32))]
    pub phone_number: String,
}

/// Issued pending verification; the code itself only travels out of band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCodeResponse {
    pub pending_id: Uuid,
    pub phone_number: String,
    pub expires_at: DateTime<Utc>,
}

impl From<PendingVerification> for RequestCodeResponse {
    fn from(pending: PendingVerification) -> Self {
        Self {
            pending_id: pending.id,
            phone_number: pending.candidate_number,
            expires_at: pending.expires_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmCodeRequest {
    #[validate(length(min = 1, max = 16))]
    pub code: String,
    #[validate(length(min = 1, max = 128))]
    pub owner_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RemoveRecordsRequest {
    #[validate(length(min = 1, max = 500))]
    pub ids: Vec<Uuid>,
}
