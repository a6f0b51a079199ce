//! Business services containing domain logic and use cases.

pub mod ledger;

// Re-export commonly used types
pub use ledger::{
    Clock, CodeGenerator, CodeSender, FraudScoringPolicy, LedgerServiceConfig, RecordView,
    RemovalReport, VerificationLedger,
};
