use crate::domain::common::AggregateId;
use crate::enums::{DocumentKind, Subject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a study document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for DocumentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DocumentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A study material in the library.
///
/// Fully static in this prototype: records come from the seed set and have
/// no create/update/delete path in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub kind: DocumentKind,
    pub subject: Subject,
    pub upload_date: NaiveDate,
    /// Pre-rendered size label ("2.4 MB"); the byte count is not kept
    pub size_label: String,
    pub status: ProcessingStatus,
    pub tags: Vec<String>,
    pub description: String,
    /// Number of assessments generated from this document.
    /// Not kept in sync with the assessment list.
    pub assessments: u32,
    pub views: u32,
}

/// Processing state shown on a library card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    Processed,
    Processing,
    Failed,
}

impl ProcessingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProcessingStatus::Processed => "processed",
            ProcessingStatus::Processing => "processing",
            ProcessingStatus::Failed => "failed",
        }
    }
}
