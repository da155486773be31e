use serde::Serialize;

use super::{credits_used, Message, Report};

/// Usage of a single message, as returned by `/usage`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageItem {
    pub message_id: i64,
    pub timestamp: String,
    pub credits_used: f64,
    /// Only set when the message resolved to a concrete report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_name: Option<String>,
}

impl UsageItem {
    /// Build the usage item for a message and the report it resolved to
    pub fn from_message(message: &Message, report: Option<&Report>) -> Self {
        Self {
            message_id: message.id,
            timestamp: message.timestamp.clone(),
            credits_used: credits_used(report, message),
            report_name: report.map(|r| r.name.clone()),
        }
    }
}
