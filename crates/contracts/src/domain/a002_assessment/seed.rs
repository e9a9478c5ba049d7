use super::aggregate::{Assessment, AssessmentId, AssessmentKind, AssessmentStatus, Difficulty};

/// The per-session assessment history shown on first render
pub fn seed_assessments() -> Vec<Assessment> {
    vec![
        Assessment {
            id: AssessmentId::new_v4(),
            title: "Biology Chapter 5 Quiz".to_string(),
            source_document: "Cell Structure and Function".to_string(),
            kind: AssessmentKind::MultipleChoice,
            difficulty: Difficulty::Medium,
            questions: 15,
            status: AssessmentStatus::Completed,
            score: Some(92),
            created_label: "2 days ago".to_string(),
        },
        Assessment {
            id: AssessmentId::new_v4(),
            title: "Chemistry Reactions Test".to_string(),
            source_document: "Chemical Bonding Notes".to_string(),
            kind: AssessmentKind::ShortAnswer,
            difficulty: Difficulty::Hard,
            questions: 8,
            status: AssessmentStatus::Ready,
            score: None,
            created_label: "1 day ago".to_string(),
        },
        Assessment {
            id: AssessmentId::new_v4(),
            title: "Physics Motion Quiz".to_string(),
            source_document: "Mechanics Fundamentals".to_string(),
            kind: AssessmentKind::MultipleChoice,
            difficulty: Difficulty::Easy,
            questions: 12,
            status: AssessmentStatus::Draft,
            score: None,
            created_label: "3 hours ago".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let assessments = seed_assessments();
        assert_eq!(assessments.len(), 3);
        // Exactly one completed record, and only it carries a score
        assert!(assessments
            .iter()
            .all(|a| a.score.is_some() == (a.status == AssessmentStatus::Completed)));
    }
}
