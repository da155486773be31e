use serde::Serialize;

use crate::domain::UsageItem;

/// Body of a successful `/usage` response
#[derive(Debug, Clone, Serialize)]
pub struct UsageResponse {
    pub usage: Vec<UsageItem>,
}

impl From<Vec<UsageItem>> for UsageResponse {
    fn from(usage: Vec<UsageItem>) -> Self {
        Self { usage }
    }
}
