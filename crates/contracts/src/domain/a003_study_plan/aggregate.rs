use crate::domain::common::AggregateId;
use crate::enums::Subject;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a study-plan item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudyPlanItemId(pub Uuid);

impl StudyPlanItemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for StudyPlanItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(StudyPlanItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// A recommended learning activity with priority and estimated duration.
/// Static descriptive record; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanItem {
    pub id: StudyPlanItemId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Pre-rendered duration label ("45 min")
    pub estimated_time: String,
    /// Percent complete, 0..=100
    pub progress: u32,
    pub kind: ActivityKind,
    pub subject: Subject,
}

/// A topic flagged for remediation by low confidence/score.
/// Static descriptive record; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeakArea {
    pub topic: String,
    pub subject: Subject,
    /// Percent confidence, 0..=100
    pub confidence: u32,
    /// Percent score of the last related assessment
    pub last_score: u32,
    pub recommended_action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn code(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Review,
    Practice,
    Assessment,
    NewTopic,
}

impl ActivityKind {
    pub fn code(&self) -> &'static str {
        match self {
            ActivityKind::Review => "review",
            ActivityKind::Practice => "practice",
            ActivityKind::Assessment => "assessment",
            ActivityKind::NewTopic => "new-topic",
        }
    }
}
