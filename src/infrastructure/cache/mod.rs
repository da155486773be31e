//! Cache implementations

mod report_cache;

pub use report_cache::ReportCache;
