//! Chat messages from the messages endpoint

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reference from a message to the report it produced
///
/// The upstream payload is loosely typed: `report_id` can be missing, null,
/// an integer or something else entirely. Each case is classified once, at
/// deserialization time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReportRef {
    /// Field missing or null
    #[default]
    Absent,
    /// A well-formed report id
    Id(i64),
    /// Present but not an integer; keeps the original value for logging
    Invalid(Value),
}

impl ReportRef {
    /// Classify a raw JSON value
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Number(number) => match number.as_i64() {
                Some(id) => Self::Id(id),
                None => Self::Invalid(Value::Number(number)),
            },
            other => Self::Invalid(other),
        }
    }

    /// JSON type name of an invalid reference, for diagnostics
    pub fn json_type(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(n) if n.is_f64() => "float",
            Value::Number(_) => "integer",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl<'de> Deserialize<'de> for ReportRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

/// A single chat message of the current billing period
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub id: i64,
    /// Opaque; passed through to the usage item unchanged
    pub timestamp: String,
    pub text: String,
    #[serde(default)]
    pub report_id: ReportRef,
}

impl Message {
    pub fn new(id: i64, timestamp: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            text: text.into(),
            report_id: ReportRef::Absent,
        }
    }

    pub fn with_report_id(mut self, report_id: ReportRef) -> Self {
        self.report_id = report_id;
        self
    }
}

/// Body of the messages endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesPage {
    /// `None` when the field is missing or null; callers treat that as empty
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

impl MessagesPage {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages: Some(messages),
        }
    }
}
