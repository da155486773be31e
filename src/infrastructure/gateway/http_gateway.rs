//! HTTP implementation of the usage data gateway

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::usage::{MessagesPage, Report, ReportLookup, UsageDataGateway};
use crate::domain::DomainError;
use crate::infrastructure::http::{HttpClientTrait, HttpResponse};
use crate::infrastructure::observability::{record_upstream_request, UpstreamOutcome};

const MESSAGES_SERVICE: &str = "messages";
const REPORTS_SERVICE: &str = "reports";

/// Gateway reading messages and reports from the upstream HTTP services
#[derive(Debug)]
pub struct HttpUsageGateway {
    client: Arc<dyn HttpClientTrait>,
    messages_url: String,
    reports_url: String,
}

impl HttpUsageGateway {
    /// Create a gateway for the given messages endpoint and reports base URL
    pub fn new(
        client: Arc<dyn HttpClientTrait>,
        messages_url: impl Into<String>,
        reports_url: impl Into<String>,
    ) -> Self {
        let reports_url: String = reports_url.into();

        Self {
            client,
            messages_url: messages_url.into(),
            reports_url: reports_url.trim_end_matches('/').to_string(),
        }
    }

    fn report_url(&self, report_id: i64) -> String {
        format!("{}/{}", self.reports_url, report_id)
    }

    async fn get(&self, service: &'static str, url: &str) -> Result<HttpResponse, DomainError> {
        let start = Instant::now();

        match self.client.get(url).await {
            Ok(response) => {
                let outcome = if response.is_success() {
                    UpstreamOutcome::Success
                } else if response.is_not_found() {
                    UpstreamOutcome::NotFound
                } else {
                    UpstreamOutcome::Error
                };
                record_upstream_request(service, outcome, start.elapsed());
                Ok(response)
            }
            Err(e) => {
                record_upstream_request(service, UpstreamOutcome::Error, start.elapsed());
                Err(match e {
                    DomainError::Upstream { message, .. } => DomainError::upstream(service, message),
                    other => other,
                })
            }
        }
    }
}

fn status_error(service: &str, url: &str, response: &HttpResponse) -> DomainError {
    DomainError::upstream(service, format!("HTTP {} from {}", response.status, url))
}

#[async_trait]
impl UsageDataGateway for HttpUsageGateway {
    async fn fetch_messages(&self) -> Result<MessagesPage, DomainError> {
        let response = self.get(MESSAGES_SERVICE, &self.messages_url).await?;

        if !response.is_success() {
            return Err(status_error(MESSAGES_SERVICE, &self.messages_url, &response));
        }

        if response.is_empty() {
            debug!("Messages endpoint returned an empty body");
            return Ok(MessagesPage::default());
        }

        let page: MessagesPage = response.json().map_err(|e| {
            DomainError::upstream(MESSAGES_SERVICE, format!("Failed to parse messages: {}", e))
        })?;

        debug!(
            count = page.messages.as_ref().map_or(0, Vec::len),
            "Fetched messages data"
        );

        Ok(page)
    }

    async fn fetch_report(&self, report_id: i64) -> Result<ReportLookup, DomainError> {
        let url = self.report_url(report_id);
        let response = self.get(REPORTS_SERVICE, &url).await?;

        if response.is_not_found() {
            warn!(report_id, "Report not found");
            return Ok(ReportLookup::Absent);
        }

        if !response.is_success() {
            return Err(status_error(REPORTS_SERVICE, &url, &response));
        }

        let report: Report = response.json().map_err(|e| {
            DomainError::upstream(
                REPORTS_SERVICE,
                format!("Failed to parse report {}: {}", report_id, e),
            )
        })?;

        debug!(report_id, "Fetched report");

        Ok(ReportLookup::Found(report))
    }
}
