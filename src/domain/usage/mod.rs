//! Credit usage domain
//!
//! Messages and reports as delivered by the upstream services, the credit
//! calculation applied to each message, and the gateway trait the usage
//! pipeline reads them through.

mod credit;
mod gateway;
mod item;
mod message;
mod report;

pub use credit::{credits_used, estimate_tokens, BASE_MODEL_RATE, CHARS_PER_TOKEN, MIN_CREDITS};
pub use gateway::UsageDataGateway;
#[cfg(test)]
pub use gateway::MockUsageDataGateway;
pub use item::UsageItem;
pub use message::{Message, MessagesPage, ReportRef};
pub use report::{Report, ReportLookup};
