use crate::domain::a002_assessment::{
    Assessment, AssessmentId, AssessmentKind, AssessmentStatus, Difficulty,
};

/// The record produced by one simulated generation run.
///
/// The generator form's selectors are decorative and are not consulted;
/// every run yields this same literal content under a fresh id.
pub fn generated_assessment() -> Assessment {
    Assessment {
        id: AssessmentId::new_v4(),
        title: "Mathematics Functions Quiz".to_string(),
        source_document: "Algebra Fundamentals".to_string(),
        kind: AssessmentKind::MultipleChoice,
        difficulty: Difficulty::Medium,
        questions: 10,
        status: AssessmentStatus::Ready,
        score: None,
        created_label: "Just now".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_record_is_ready() {
        let assessment = generated_assessment();
        assert_eq!(assessment.status, AssessmentStatus::Ready);
        assert_eq!(assessment.questions, 10);
        assert_eq!(assessment.score, None);
        assert_eq!(assessment.created_label, "Just now");
    }

    #[test]
    fn test_each_run_gets_a_fresh_id() {
        assert_ne!(generated_assessment().id, generated_assessment().id);
    }
}
