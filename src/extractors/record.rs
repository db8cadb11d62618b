// src/extractors/record.rs
use serde::{Deserialize, Serialize};

/// Label used when no heading precedes a table.
pub const UNTITLED_SECTION: &str = "Untitled Section";

/// One extracted table row. Field order here is the key order in the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    #[serde(rename = "Service")]
    pub service: String,
    #[serde(rename = "Audit category")]
    pub audit_category: String,
    #[serde(rename = "Activity")]
    pub activity: String,
}
