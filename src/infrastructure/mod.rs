//! Infrastructure layer - External service implementations

pub mod cache;
pub mod gateway;
pub mod http;
pub mod logging;
pub mod observability;
pub mod services;
