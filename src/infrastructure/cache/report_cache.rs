//! Cache-aside store of report lookups

use std::sync::Arc;

use moka::future::Cache;
use tracing::debug;

use crate::domain::usage::{ReportLookup, UsageDataGateway};
use crate::domain::DomainError;
use crate::infrastructure::observability::record_report_cache_lookup;

/// Process-wide cache of report lookups, keyed by report id
///
/// Both found and absent reports are cached for the lifetime of the cache,
/// with no TTL and no capacity bound. Failed fetches are never stored.
///
/// Concurrent misses for the same id are not coalesced: each may reach the
/// gateway. Writes are insert-if-absent, so the first stored outcome wins
/// and an id's entry never changes once present.
pub struct ReportCache {
    gateway: Arc<dyn UsageDataGateway>,
    entries: Cache<i64, ReportLookup>,
}

impl ReportCache {
    pub fn new(gateway: Arc<dyn UsageDataGateway>) -> Self {
        Self {
            gateway,
            entries: Cache::builder().build(),
        }
    }

    /// Resolve a report, fetching it upstream on a miss
    pub async fn get_report(&self, report_id: i64) -> Result<ReportLookup, DomainError> {
        if let Some(cached) = self.entries.get(&report_id).await {
            record_report_cache_lookup(true);
            debug!(report_id, absent = cached.is_absent(), "Report cache hit");
            return Ok(cached);
        }

        record_report_cache_lookup(false);
        debug!(report_id, "Report cache miss, fetching report");

        let lookup = self.gateway.fetch_report(report_id).await?;
        let stored = self.entries.entry(report_id).or_insert(lookup).await;

        Ok(stored.into_value())
    }

    /// Cached value for an id, without fetching
    pub async fn peek(&self, report_id: i64) -> Option<ReportLookup> {
        self.entries.get(&report_id).await
    }

    /// Number of cached report ids
    pub async fn len(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl std::fmt::Debug for ReportCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}
