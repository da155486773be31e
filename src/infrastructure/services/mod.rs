//! Application services

mod usage_service;

pub use usage_service::UsageService;
