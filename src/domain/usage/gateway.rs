//! Gateway trait for the upstream message and report services

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{MessagesPage, ReportLookup};
use crate::domain::DomainError;

/// Read-only access to the two upstream services
///
/// Implementations must keep "the resource does not exist" apart from
/// "the call failed": a missing report is `Ok(ReportLookup::Absent)`, while
/// transport and server failures are `Err(DomainError::Upstream)`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UsageDataGateway: Send + Sync {
    /// Fetches the messages of the current billing period
    async fn fetch_messages(&self) -> Result<MessagesPage, DomainError>;

    /// Fetches a single report by id
    async fn fetch_report(&self, report_id: i64) -> Result<ReportLookup, DomainError>;
}
