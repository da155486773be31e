//! Reports and the outcome of looking one up

use serde::{Deserialize, Serialize};

/// A generated report with a fixed credit cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub name: String,
    pub credit_cost: f64,
}

impl Report {
    pub fn new(id: i64, name: impl Into<String>, credit_cost: f64) -> Self {
        Self {
            id,
            name: name.into(),
            credit_cost,
        }
    }
}

/// Result of resolving a report id upstream
///
/// `Absent` is a business outcome (the report does not exist), not a
/// failure. It is cached like any found report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLookup {
    Found(Report),
    Absent,
}

impl ReportLookup {
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Found(report) => Some(report),
            Self::Absent => None,
        }
    }

    pub fn into_report(self) -> Option<Report> {
        match self {
            Self::Found(report) => Some(report),
            Self::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Option<Report>> for ReportLookup {
    fn from(report: Option<Report>) -> Self {
        report.map_or(Self::Absent, Self::Found)
    }
}
