//! API request/response types

pub mod error;
pub mod usage;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse};
pub use usage::UsageResponse;
