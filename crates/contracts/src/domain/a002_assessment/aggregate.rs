use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub Uuid);

impl AssessmentId {
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

impl AggregateId for AssessmentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AssessmentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A generated quiz/test record associated with a source document.
///
/// The list is only ever extended by prepending one new record; records are
/// never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: AssessmentId,
    pub title: String,
    /// Label of the source document ("Based on: ...")
    pub source_document: String,
    pub kind: AssessmentKind,
    pub difficulty: Difficulty,
    pub questions: u32,
    pub status: AssessmentStatus,
    /// Percent score, present only on completed assessments
    pub score: Option<u32>,
    /// Human-readable creation label ("2 days ago", "Just now");
    /// the prototype keeps no clock-derived timestamps
    pub created_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentKind {
    MultipleChoice,
    ShortAnswer,
    Essay,
}

impl AssessmentKind {
    pub fn code(&self) -> &'static str {
        match self {
            AssessmentKind::MultipleChoice => "multiple-choice",
            AssessmentKind::ShortAnswer => "short-answer",
            AssessmentKind::Essay => "essay",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AssessmentKind::MultipleChoice => "Multiple Choice",
            AssessmentKind::ShortAnswer => "Short Answer",
            AssessmentKind::Essay => "Essay",
        }
    }

    pub fn all() -> Vec<AssessmentKind> {
        vec![
            AssessmentKind::MultipleChoice,
            AssessmentKind::ShortAnswer,
            AssessmentKind::Essay,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn code(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Draft,
    Ready,
    Completed,
}

impl AssessmentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AssessmentStatus::Draft => "draft",
            AssessmentStatus::Ready => "ready",
            AssessmentStatus::Completed => "completed",
        }
    }
}
