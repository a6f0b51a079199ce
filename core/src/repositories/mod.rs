pub mod number;
pub mod pending;
pub mod phone_record;

pub use number::{InMemoryNumberRepository, NumberRepository};
pub use pending::{InMemoryPendingStore, PendingVerificationStore};
pub use phone_record::{InMemoryPhoneRecordRepository, PhoneRecordRepository};
