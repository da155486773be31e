//! Usage aggregation over the messages of the current period

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, warn};

use crate::domain::usage::{Message, Report, ReportRef, UsageDataGateway, UsageItem};
use crate::domain::DomainError;
use crate::infrastructure::cache::ReportCache;

/// Builds the usage list: one item per message, in message order
pub struct UsageService {
    gateway: Arc<dyn UsageDataGateway>,
    reports: Arc<ReportCache>,
    report_fetch_concurrency: usize,
}

impl UsageService {
    pub fn new(gateway: Arc<dyn UsageDataGateway>, reports: Arc<ReportCache>) -> Self {
        Self {
            gateway,
            reports,
            report_fetch_concurrency: 1,
        }
    }

    /// Resolve up to `concurrency` messages at a time. Output order is
    /// unaffected.
    pub fn with_report_fetch_concurrency(mut self, concurrency: usize) -> Self {
        self.report_fetch_concurrency = concurrency.max(1);
        self
    }

    /// Compute the usage of every message of the current period.
    ///
    /// Fails as a whole if the messages fetch fails or any report fetch
    /// fails for a reason other than the report not existing.
    pub async fn compute_usage(&self) -> Result<Vec<UsageItem>, DomainError> {
        let page = self.gateway.fetch_messages().await?;

        let Some(messages) = page.messages else {
            debug!("No messages were fetched");
            return Ok(Vec::new());
        };

        let pending: Vec<_> = messages
            .iter()
            .map(|message| self.build_usage_item(message))
            .collect();

        let usage: Vec<UsageItem> = stream::iter(pending)
            .buffered(self.report_fetch_concurrency)
            .try_collect()
            .await?;

        debug!(items = usage.len(), "Computed usage");

        Ok(usage)
    }

    async fn build_usage_item(&self, message: &Message) -> Result<UsageItem, DomainError> {
        let report = self.resolve_report(message).await?;
        Ok(UsageItem::from_message(message, report.as_ref()))
    }

    async fn resolve_report(&self, message: &Message) -> Result<Option<Report>, DomainError> {
        match &message.report_id {
            ReportRef::Absent => Ok(None),
            ReportRef::Id(report_id) => {
                let lookup = self.reports.get_report(*report_id).await?;
                Ok(lookup.into_report())
            }
            ReportRef::Invalid(value) => {
                warn!(
                    message_id = message.id,
                    report_id = %value,
                    report_id_type = ReportRef::json_type(value),
                    "Invalid report_id format"
                );
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for UsageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsageService")
            .field("reports", &self.reports)
            .field("report_fetch_concurrency", &self.report_fetch_concurrency)
            .finish()
    }
}
