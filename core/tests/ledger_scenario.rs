//! End-to-end lifecycle of a single phone number through the ledger

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

use ng_core::errors::{DomainError, LedgerError};
use ng_core::repositories::{InMemoryPendingStore, InMemoryPhoneRecordRepository};
use ng_core::services::ledger::{
    CodeSender, FixedCodeGenerator, LedgerServiceConfig, ManualClock, VerificationLedger,
};
use ng_core::RecordStatus;

struct SilentSender;

#[async_trait]
impl CodeSender for SilentSender {
    async fn send_code(&self, _phone: &str, _code: &str) -> Result<String, String> {
        Ok("silent".to_string())
    }
}

fn ledger(clock: Arc<ManualClock>) -> VerificationLedger {
    VerificationLedger::new(
        Arc::new(InMemoryPhoneRecordRepository::new()),
        Arc::new(InMemoryPendingStore::new()),
        Arc::new(SilentSender),
        LedgerServiceConfig::default(),
    )
    .with_clock(clock)
    .with_code_generator(Arc::new(FixedCodeGenerator::new("863509")))
}

#[tokio::test]
async fn test_register_report_and_remove() {
    let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 3, 10, 30, 0).unwrap()));
    let ledger = ledger(clock.clone());

    let pending = ledger.request_verification_code("+65 8939 5160").await.unwrap();
    let record = ledger
        .confirm_and_register(&pending, "863509", "company-7")
        .await
        .unwrap();

    assert_eq!(record.report_count, 0);
    assert_eq!(ledger.status_of(record.id).await.unwrap(), RecordStatus::Verified);
    assert_eq!(ledger.list_by_owner("company-7").await.unwrap(), vec![record.clone()]);

    for _ in 0..3 {
        ledger.file_suspicion_report(record.id).await.unwrap();
    }
    assert_eq!(ledger.get_record(record.id).await.unwrap().report_count, 3);
    assert_eq!(ledger.summarize("company-7").await.unwrap().fraud_level, 3);

    ledger.remove_record(record.id).await.unwrap();
    assert!(ledger.list_by_owner("company-7").await.unwrap().is_empty());

    let summary = ledger.summarize("company-7").await.unwrap();
    assert_eq!((summary.fraud_level, summary.phone_update_count), (0, 0));
}

#[tokio::test]
async fn test_wrong_code_registers_nothing() {
    let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 3, 10, 30, 0).unwrap()));
    let ledger = ledger(clock);

    let pending = ledger.request_verification_code("+65 8939 5160").await.unwrap();
    let err = ledger
        .confirm_and_register(&pending, "000000", "company-7")
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Ledger(LedgerError::CodeMismatch)));
    assert!(ledger.list_by_owner("company-7").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reverification_boundary() {
    let start = Utc.with_ymd_and_hms(2024, 6, 3, 10, 30, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let ledger = ledger(clock.clone());

    let pending = ledger.request_verification_code("+65 9123 4567").await.unwrap();
    let record = ledger
        .confirm_and_register(&pending, "863509", "company-7")
        .await
        .unwrap();
    let warning = ledger.config().warning_window;

    let boundary = record.reverify_by - warning;
    assert_eq!(ledger.record_status(&record, boundary), RecordStatus::Verified);
    assert_eq!(
        ledger.record_status(&record, boundary + Duration::milliseconds(1)),
        RecordStatus::DueForReverification
    );
    assert_eq!(ledger.days_until_reverification(&record, boundary), 3);
    assert_eq!(
        ledger.days_until_reverification(&record, boundary + Duration::milliseconds(1)),
        2
    );

    clock.set(boundary + Duration::milliseconds(1));
    let reverified = ledger.reverify(record.id).await.unwrap();
    assert_eq!(reverified.verified_at, ledger.now());
    assert_eq!(ledger.status_of(record.id).await.unwrap(), RecordStatus::Verified);
}
