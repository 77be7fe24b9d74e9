pub mod contacts;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
