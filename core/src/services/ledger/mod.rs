//! Verification ledger: the phone number verification lifecycle
//!
//! This module provides:
//! - One-time code issuance and redemption gating new registrations
//! - Reverification with an optional due check
//! - Suspicion reports and per-owner fraud summaries
//! - Single and batch removal
//! - Pluggable collaborators for delivery, codes, time and scoring

mod clock;
mod code;
mod config;
mod scoring;
mod service;
mod traits;
mod types;


pub use clock::{ManualClock, SystemClock};
pub use code::{FixedCodeGenerator, SecureCodeGenerator};
pub use config::LedgerServiceConfig;
pub use scoring::{policy_from_config, ReportCountPolicy, WeightedPolicy};
pub use service::VerificationLedger;
pub use traits::{Clock, CodeGenerator, CodeSender, FraudScoringPolicy};
pub use types::{RecordView, RemovalReport};
