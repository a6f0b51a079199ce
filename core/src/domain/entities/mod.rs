//! Domain entities representing core business objects.

pub mod number_entry;
pub mod pending_verification;
pub mod phone_record;

// Re-export commonly used types
pub use number_entry::{NumberEntry, NumberFields};
pub use pending_verification::{PendingVerification, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
pub use phone_record::{
    PhoneRecord, DEFAULT_REVERIFICATION_WINDOW_DAYS, DEFAULT_WARNING_WINDOW_DAYS,
};
