//! Verification ledger implementation

use chrono::{DateTime, SubsecRound, Utc};
use constant_time_eq::constant_time_eq;
use ng_shared::config::ReverifyPolicy;
use ng_shared::phone::mask_phone_number;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::{PendingVerification, PhoneRecord};
use crate::domain::value_objects::{OwnerSuspicionSummary, RecordStatus};
use crate::errors::{DomainError, DomainResult, LedgerError};
use crate::repositories::{PendingVerificationStore, PhoneRecordRepository};

use super::clock::SystemClock;
use super::code::SecureCodeGenerator;
use super::config::LedgerServiceConfig;
use super::scoring::ReportCountPolicy;
use super::traits::{Clock, CodeGenerator, CodeSender, FraudScoringPolicy};
use super::types::{RecordView, RemovalReport};

/// Authoritative set of registered phone numbers and their lifecycle rules
///
/// Storage, code delivery, code generation, time and fraud scoring are all
/// injected. Mutations on a given record are serialized through a per-record
/// lock; reads go straight to the repository.
pub struct VerificationLedger {
    records: Arc<dyn PhoneRecordRepository>,
    pending: Arc<dyn PendingVerificationStore>,
    sender: Arc<dyn CodeSender>,
    generator: Arc<dyn CodeGenerator>,
    clock: Arc<dyn Clock>,
    fraud_policy: Arc<dyn FraudScoringPolicy>,
    config: LedgerServiceConfig,
    record_locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl VerificationLedger {
    /// Create a ledger with the system clock, OS-random codes and the
    /// report-count fraud policy
    ///
    /// # Arguments
    ///
    /// * `records` - Phone record repository
    /// * `pending` - Pending verification store
    /// * `sender` - Out-of-band code transport
    /// * `config` - Ledger rules
    pub fn new(
        records: Arc<dyn PhoneRecordRepository>,
        pending: Arc<dyn PendingVerificationStore>,
        sender: Arc<dyn CodeSender>,
        config: LedgerServiceConfig,
    ) -> Self {
        Self {
            records,
            pending,
            sender,
            generator: Arc::new(SecureCodeGenerator::default()),
            clock: Arc::new(SystemClock),
            fraud_policy: Arc::new(ReportCountPolicy),
            config,
            record_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_code_generator(mut self, generator: Arc<dyn CodeGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_fraud_policy(mut self, policy: Arc<dyn FraudScoringPolicy>) -> Self {
        self.fraud_policy = policy;
        self
    }

    /// The rules this ledger enforces
    pub fn config(&self) -> &LedgerServiceConfig {
        &self.config
    }

    /// Issue a one-time code for a candidate number
    ///
    /// This method:
    /// 1. Validates the number against the configured format
    /// 2. Generates a code and stores the pending verification, superseding
    ///    any earlier one for the same number
    /// 3. Delivers the code out of band
    ///
    /// The record set is never touched.
    pub async fn request_verification_code(&self, candidate_number: &str) -> DomainResult<PendingVerification> {
        if !self.config.phone_format.matches(candidate_number) {
            tracing::warn!(
                phone = %mask_phone_number(candidate_number),
                event = "invalid_phone_format",
                "Rejected verification code request"
            );
            return Err(LedgerError::InvalidFormat {
                phone: candidate_number.to_string(),
            }
            .into());
        }

        let pending = PendingVerification::new(
            candidate_number.to_string(),
            self.generator.generate(),
            self.now(),
            self.config.code_ttl,
        );
        self.pending.put(pending.clone()).await?;

        match self.sender.send_code(candidate_number, &pending.issued_code).await {
            Ok(message_id) => {
                tracing::info!(
                    phone = %mask_phone_number(candidate_number),
                    pending_id = %pending.id,
                    message_id = %message_id,
                    event = "verification_code_issued",
                    "Issued verification code"
                );
                Ok(pending)
            }
            Err(e) => {
                // An undeliverable code must not stay redeemable
                if let Err(take_err) = self.pending.take(pending.id).await {
                    tracing::error!(
                        pending_id = %pending.id,
                        error = %take_err,
                        event = "pending_discard_failed",
                        "Failed to discard undeliverable pending verification"
                    );
                }
                tracing::error!(
                    phone = %mask_phone_number(candidate_number),
                    error = %e,
                    event = "verification_code_delivery_failed",
                    "Failed to deliver verification code"
                );
                Err(DomainError::Internal {
                    message: format!("Failed to send verification code: {}", e),
                })
            }
        }
    }

    /// Look up a live pending verification by id
    pub async fn pending_verification(&self, pending_id: Uuid) -> DomainResult<Option<PendingVerification>> {
        self.pending.get(pending_id).await
    }

    /// Redeem a code and register the candidate number under `owner_id`
    ///
    /// Every submission consumes the pending verification, whether or not it
    /// succeeds. A mismatched code is reported before expiry, and a pending
    /// that was already consumed or superseded counts as expired. On failure
    /// no record is created.
    pub async fn confirm_and_register(
        &self,
        pending: &PendingVerification,
        submitted_code: &str,
        owner_id: &str,
    ) -> DomainResult<PhoneRecord> {
        let now = self.now();
        let live = self.pending.take(pending.id).await?;

        if !codes_match(&pending.issued_code, submitted_code) {
            tracing::warn!(
                phone = %mask_phone_number(&pending.candidate_number),
                pending_id = %pending.id,
                event = "verification_code_mismatch",
                "Submitted verification code does not match"
            );
            return Err(LedgerError::CodeMismatch.into());
        }

        if pending.is_expired(now) || live.as_ref() != Some(pending) {
            tracing::warn!(
                phone = %mask_phone_number(&pending.candidate_number),
                pending_id = %pending.id,
                event = "verification_code_expired",
                "Verification code expired or already consumed"
            );
            return Err(LedgerError::CodeExpired.into());
        }

        let record = PhoneRecord::new(
            owner_id.to_string(),
            pending.candidate_number.clone(),
            now,
            self.config.reverification_window,
        );
        let record = self.records.put(record).await?;

        tracing::info!(
            record_id = %record.id,
            owner_id = %record.owner_id,
            phone = %mask_phone_number(&record.phone_number),
            event = "phone_registered",
            "Registered verified phone number"
        );

        Ok(record)
    }

    /// Redeem a code for a pending verification known only by id
    ///
    /// An unknown id means the pending was consumed, superseded or never
    /// issued, and is reported as `CodeExpired`.
    pub async fn confirm_pending(
        &self,
        pending_id: Uuid,
        submitted_code: &str,
        owner_id: &str,
    ) -> DomainResult<PhoneRecord> {
        let pending = self
            .pending_verification(pending_id)
            .await?
            .ok_or(LedgerError::CodeExpired)?;
        self.confirm_and_register(&pending, submitted_code, owner_id).await
    }

    /// Reset the verification timestamps of a record
    ///
    /// Under `ReverifyPolicy::RequireDue` the record must be due first.
    /// Reports are preserved.
    pub async fn reverify(&self, record_id: Uuid) -> DomainResult<PhoneRecord> {
        let lock = self.record_lock(record_id).await;
        let _guard = lock.lock().await;

        let mut record = self.load_locked(record_id, &lock).await?;
        let now = self.now();

        if self.config.reverify_policy == ReverifyPolicy::RequireDue
            && !record.is_due(now, self.config.warning_window)
        {
            return Err(LedgerError::NotDue { id: record_id }.into());
        }

        record.reverify(now, self.config.reverification_window);
        let record = self.records.put(record).await?;

        tracing::info!(
            record_id = %record.id,
            reverify_by = %record.reverify_by,
            event = "phone_reverified",
            "Reverified phone number"
        );

        Ok(record)
    }

    /// Add one suspicion report to a record
    pub async fn file_suspicion_report(&self, record_id: Uuid) -> DomainResult<PhoneRecord> {
        let record = {
            let lock = self.record_lock(record_id).await;
            let _guard = lock.lock().await;

            let mut record = self.load_locked(record_id, &lock).await?;
            record.add_report();
            self.records.put(record).await?
        };

        // The report is already stored; a failed summary only costs the log field
        match self.summarize(&record.owner_id).await {
            Ok(summary) => tracing::info!(
                record_id = %record.id,
                owner_id = %record.owner_id,
                report_count = record.report_count,
                fraud_level = summary.fraud_level,
                event = "suspicion_reported",
                "Filed suspicion report"
            ),
            Err(e) => tracing::warn!(
                record_id = %record.id,
                owner_id = %record.owner_id,
                report_count = record.report_count,
                error = %e,
                event = "fraud_level_unavailable",
                "Filed suspicion report without fraud level"
            ),
        }

        Ok(record)
    }

    /// Delete a record
    pub async fn remove_record(&self, record_id: Uuid) -> DomainResult<()> {
        let lock = self.record_lock(record_id).await;
        let guard = lock.lock().await;

        let removed = self.records.delete(record_id).await;
        drop(guard);
        if removed.is_ok() {
            self.release_lock_if_idle(record_id, &lock).await;
        }
        let removed = removed?;

        if !removed {
            return Err(LedgerError::NotFound { id: record_id }.into());
        }

        tracing::info!(record_id = %record_id, event = "phone_removed", "Removed phone record");
        Ok(())
    }

    /// Delete every resolvable id, reporting the ones that did not resolve
    ///
    /// Repeated ids are handled once.
    pub async fn remove_many(&self, ids: &[Uuid]) -> DomainResult<RemovalReport> {
        let mut seen = HashSet::new();
        let mut report = RemovalReport::default();

        for &id in ids.iter().filter(|id| seen.insert(**id)) {
            match self.remove_record(id).await {
                Ok(()) => report.removed.push(id),
                Err(DomainError::Ledger(LedgerError::NotFound { .. })) => report.not_found.push(id),
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    /// Records of an owner, oldest verification first (ties by id)
    pub async fn list_by_owner(&self, owner_id: &str) -> DomainResult<Vec<PhoneRecord>> {
        let mut records = self.records.list_by_owner(owner_id).await?;
        records.sort_by(|a, b| a.verified_at.cmp(&b.verified_at).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    /// Records of an owner with their derived state
    pub async fn list_views_by_owner(&self, owner_id: &str) -> DomainResult<Vec<RecordView>> {
        let now = self.now();
        Ok(self
            .list_by_owner(owner_id)
            .await?
            .into_iter()
            .map(|record| self.view_at(record, now))
            .collect())
    }

    /// Aggregate suspicion signals across an owner's live records
    ///
    /// Unknown owners get an all-zero summary.
    pub async fn summarize(&self, owner_id: &str) -> DomainResult<OwnerSuspicionSummary> {
        let records = self.records.list_by_owner(owner_id).await?;

        let mut summary = OwnerSuspicionSummary::empty(owner_id);
        summary.record_count = records.len();
        summary.total_reports = records.iter().map(|r| r.report_count as u64).sum();
        summary.phone_update_count = records.iter().map(|r| r.update_count as u64).sum();
        summary.fraud_level = self
            .fraud_policy
            .score(summary.total_reports, summary.phone_update_count);

        Ok(summary)
    }

    /// Fetch a record
    pub async fn get_record(&self, record_id: Uuid) -> DomainResult<PhoneRecord> {
        self.load(record_id).await
    }

    /// Derived state of a record at `now`
    pub fn record_status(&self, record: &PhoneRecord, now: DateTime<Utc>) -> RecordStatus {
        if record.is_due(now, self.config.warning_window) {
            RecordStatus::DueForReverification
        } else {
            RecordStatus::Verified
        }
    }

    /// Current derived state of a stored record
    pub async fn status_of(&self, record_id: Uuid) -> DomainResult<RecordStatus> {
        let record = self.load(record_id).await?;
        Ok(self.record_status(&record, self.now()))
    }

    /// Whole days until the record must be reverified, floored
    pub fn days_until_reverification(&self, record: &PhoneRecord, now: DateTime<Utc>) -> i64 {
        record.days_until_reverification(now)
    }

    /// A record with its derived state at `now`
    pub fn view_at(&self, record: PhoneRecord, now: DateTime<Utc>) -> RecordView {
        RecordView {
            status: self.record_status(&record, now),
            days_until_reverification: record.days_until_reverification(now),
            record,
        }
    }

    /// The ledger's current time, truncated to milliseconds
    ///
    /// Stored timestamps never carry more precision than `DATETIME(3)` keeps.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now().trunc_subsecs(3)
    }

    async fn load(&self, record_id: Uuid) -> DomainResult<PhoneRecord> {
        self.records
            .get(record_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound { id: record_id }.into())
    }

    // Called with `lock` held. A missing record drops its map entry so
    // unknown ids do not accumulate locks; any other failure keeps it.
    async fn load_locked(&self, record_id: Uuid, lock: &Arc<Mutex<()>>) -> DomainResult<PhoneRecord> {
        let result = self.load(record_id).await;
        if let Err(DomainError::Ledger(LedgerError::NotFound { .. })) = &result {
            self.release_lock_if_idle(record_id, lock).await;
        }
        result
    }

    async fn record_lock(&self, record_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.record_locks.lock().await;
        locks.entry(record_id).or_default().clone()
    }

    // Removes the map entry only when the map and the caller hold the sole
    // references; a waiter holding a clone keeps it alive.
    async fn release_lock_if_idle(&self, record_id: Uuid, lock: &Arc<Mutex<()>>) {
        let mut locks = self.record_locks.lock().await;
        let idle = locks
            .get(&record_id)
            .is_some_and(|held| Arc::ptr_eq(held, lock) && Arc::strong_count(lock) == 2);
        if idle {
            locks.remove(&record_id);
        }
    }
}

fn codes_match(issued: &str, submitted: &str) -> bool {
    issued.len() == submitted.len() && constant_time_eq(issued.as_bytes(), submitted.as_bytes())
}
