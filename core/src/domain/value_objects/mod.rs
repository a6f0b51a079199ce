//! Value objects representing immutable domain concepts.

pub mod owner_summary;
pub mod record_status;

// Re-export commonly used types
pub use owner_summary::OwnerSuspicionSummary;
pub use record_status::RecordStatus;
