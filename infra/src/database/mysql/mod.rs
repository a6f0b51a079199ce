//! MySQL repository implementations

pub mod number_repository_impl;
pub mod phone_record_repository_impl;

pub use number_repository_impl::MySqlNumberRepository;
pub use phone_record_repository_impl::MySqlPhoneRecordRepository;
