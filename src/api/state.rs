//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, UsageItem};
use crate::infrastructure::cache::ReportCache;
use crate::infrastructure::services::UsageService;

/// Application state containing shared services using dynamic dispatch
///
/// Created once at startup; the report cache lives as long as the state.
#[derive(Clone)]
pub struct AppState {
    pub usage_service: Arc<dyn UsageServiceTrait>,
    pub report_cache: Arc<ReportCache>,
}

impl AppState {
    pub fn new(usage_service: Arc<dyn UsageServiceTrait>, report_cache: Arc<ReportCache>) -> Self {
        Self {
            usage_service,
            report_cache,
        }
    }
}

/// Trait for usage service operations
#[async_trait::async_trait]
pub trait UsageServiceTrait: Send + Sync {
    async fn compute_usage(&self) -> Result<Vec<UsageItem>, DomainError>;
}

#[async_trait::async_trait]
impl UsageServiceTrait for UsageService {
    async fn compute_usage(&self) -> Result<Vec<UsageItem>, DomainError> {
        UsageService::compute_usage(self).await
    }
}
