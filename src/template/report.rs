use crate::inventory::ComponentType;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Model label recorded when a template entry has no model fields.
pub const UNKNOWN_MODEL: &str = "Unknown";

/// Shown when the service rejects an assignment without a message.
const UNKNOWN_API_MESSAGE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingModelInfo,
    OutOfStock,
    /// The service refused the assignment, with its message if it sent one.
    Rejected(Option<String>),
    NetworkError,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingModelInfo => f.write_str("missing model info"),
            SkipReason::OutOfStock => f.write_str("out of stock / not available"),
            SkipReason::Rejected(message) => {
                let message = message.as_deref().filter(|m| !m.is_empty());
                write!(f, "API error: {}", message.unwrap_or(UNKNOWN_API_MESSAGE))
            }
            SkipReason::NetworkError => f.write_str("network/server error"),
        }
    }
}

impl Serialize for SkipReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddedComponent {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub model: String,
    pub uuid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedComponent {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub model: String,
    pub reason: SkipReason,
}

/// Outcome of one template import run.
#[derive(Debug, Clone, Serialize)]
pub struct ImportResult {
    pub target_uuid: String,
    pub template_uuid: String,
    pub started_at: DateTime<Utc>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub added: Vec<AddedComponent>,
    pub skipped: Vec<SkippedComponent>,
    pub duration_ms: u64,
}

impl ImportResult {
    pub fn new(target_uuid: &str, template_uuid: &str) -> Self {
        Self {
            target_uuid: target_uuid.to_string(),
            template_uuid: template_uuid.to_string(),
            started_at: Utc::now(),
            success: false,
            error: None,
            added: Vec::new(),
            skipped: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn record_added(&mut self, component_type: ComponentType, model: &str, uuid: &str) {
        self.added.push(AddedComponent {
            component_type,
            model: model.to_string(),
            uuid: uuid.to_string(),
        });
    }

    pub fn record_skipped(&mut self, component_type: ComponentType, model: Option<&str>, reason: SkipReason) {
        self.skipped.push(SkippedComponent {
            component_type,
            model: model.unwrap_or(UNKNOWN_MODEL).to_string(),
            reason,
        });
    }

    pub fn summary(&self) -> String {
        format!(
            "{} added, {} skipped in {} ms",
            self.added.len(),
            self.skipped.len(),
            self.duration_ms
        )
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
