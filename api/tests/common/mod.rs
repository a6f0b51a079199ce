//! Shared fixtures for API integration tests

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::{Arc, Mutex};

use ng_api::app::AppState;
use ng_core::repositories::{InMemoryNumberRepository, InMemoryPendingStore, InMemoryPhoneRecordRepository};
use ng_core::services::ledger::{
    CodeSender, FixedCodeGenerator, LedgerServiceConfig, ManualClock, VerificationLedger,
};

pub const ISSUED_CODE: &str = "863509";
pub const PHONE: &str = "+65 8939 5160";
pub const MAX_PAYLOAD: usize = 256 * 1024;

/// Code sender that remembers what it was asked to deliver
#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl CodeSender for RecordingSender {
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String> {
        self.sent.lock().unwrap().push((phone.to_string(), code.to_string()));
        Ok("test-message".to_string())
    }
}

pub struct TestContext {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
    pub sender: Arc<RecordingSender>,
}

pub fn context() -> TestContext {
    let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()));
    let sender = Arc::new(RecordingSender::default());

    let ledger = VerificationLedger::new(
        Arc::new(InMemoryPhoneRecordRepository::new()),
        Arc::new(InMemoryPendingStore::new()),
        sender.clone(),
        LedgerServiceConfig::default(),
    )
    .with_clock(clock.clone())
    .with_code_generator(Arc::new(FixedCodeGenerator::new(ISSUED_CODE)));

    TestContext {
        state: AppState::new(Arc::new(ledger), Arc::new(InMemoryNumberRepository::new())),
        clock,
        sender,
    }
}
