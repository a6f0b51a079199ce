//! Request and response bodies

pub mod ledger;
pub mod numbers;

pub use ledger::{ConfirmCodeRequest, RemoveRecordsRequest, RequestCodeRequest, RequestCodeResponse};
pub use numbers::NumberRequest;
