//! Credit Usage API
//!
//! Computes the credit usage of every chat message in the current billing
//! period. Messages come from an upstream messages service; messages that
//! produced a report are priced from the report service, with lookups held
//! in a process-wide cache. Everything else is estimated from text length.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::{DomainError, UsageDataGateway};
use infrastructure::{
    cache::ReportCache,
    gateway::HttpUsageGateway,
    http::{HttpClient, HttpClientTrait},
    services::UsageService,
};

/// Create the application state from configuration
///
/// The report cache created here is the only one for the process; it is
/// dropped with the state on shutdown.
pub fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let upstream = &config.upstream;

    let http_client: Arc<dyn HttpClientTrait> =
        Arc::new(HttpClient::with_timeout(upstream.timeout())?);

    let gateway: Arc<dyn UsageDataGateway> = Arc::new(HttpUsageGateway::new(
        http_client,
        upstream.messages_url.clone(),
        upstream.reports_url.clone(),
    ));

    let report_cache = Arc::new(ReportCache::new(gateway.clone()));

    let usage_service = UsageService::new(gateway, report_cache.clone())
        .with_report_fetch_concurrency(upstream.report_fetch_concurrency);

    info!(
        messages_url = %upstream.messages_url,
        reports_url = %upstream.reports_url,
        timeout_secs = upstream.timeout_secs,
        report_fetch_concurrency = upstream.report_fetch_concurrency,
        "Usage pipeline configured"
    );

    Ok(AppState::new(Arc::new(usage_service), report_cache))
}
