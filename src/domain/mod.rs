//! Domain layer - Core business logic and entities

pub mod error;
pub mod usage;

pub use error::DomainError;
pub use usage::{
    credits_used, Message, MessagesPage, Report, ReportLookup, ReportRef, UsageDataGateway,
    UsageItem,
};
