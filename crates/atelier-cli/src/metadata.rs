use atelier_core::{Operation, UtcDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata attached to every CLI report.
///
/// `total` and `sectors` appear only for list operations that carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    pub generated_at: UtcDateTime,
    pub operation: Operation,
    pub latency_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sectors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ReportMeta {
    pub fn new(operation: Operation, latency_ms: u64) -> Self {
        Self {
            generated_at: UtcDateTime::now(),
            operation,
            latency_ms,
            total: None,
            sectors: None,
            warnings: Vec::new(),
        }
    }
}

/// Envelope printed by every query subcommand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub data: Value,
}
