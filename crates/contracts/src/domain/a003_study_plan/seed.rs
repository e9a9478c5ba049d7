use super::aggregate::{ActivityKind, Priority, StudyPlanItem, StudyPlanItemId, WeakArea};
use crate::enums::Subject;

/// Recommended study plan, in priority order
pub fn seed_study_plan() -> Vec<StudyPlanItem> {
    vec![
        StudyPlanItem {
            id: StudyPlanItemId::new_v4(),
            title: "Review Chemical Bonding".to_string(),
            description: "Focus on ionic and covalent bonds based on recent assessment results"
                .to_string(),
            priority: Priority::High,
            estimated_time: "45 min".to_string(),
            progress: 0,
            kind: ActivityKind::Review,
            subject: Subject::Chemistry,
        },
        StudyPlanItem {
            id: StudyPlanItemId::new_v4(),
            title: "Practice Physics Problems".to_string(),
            description: "Mechanics problem-solving to strengthen weak areas".to_string(),
            priority: Priority::High,
            estimated_time: "60 min".to_string(),
            progress: 25,
            kind: ActivityKind::Practice,
            subject: Subject::Physics,
        },
        StudyPlanItem {
            id: StudyPlanItemId::new_v4(),
            title: "Biology Cell Division Quiz".to_string(),
            description: "Test your understanding of mitosis and meiosis".to_string(),
            priority: Priority::Medium,
            estimated_time: "20 min".to_string(),
            progress: 0,
            kind: ActivityKind::Assessment,
            subject: Subject::Biology,
        },
        StudyPlanItem {
            id: StudyPlanItemId::new_v4(),
            title: "Advanced Calculus Concepts".to_string(),
            description: "Explore derivatives and integrals in depth".to_string(),
            priority: Priority::Low,
            estimated_time: "90 min".to_string(),
            progress: 0,
            kind: ActivityKind::NewTopic,
            subject: Subject::Mathematics,
        },
    ]
}

/// Topics flagged for remediation, weakest first
pub fn seed_weak_areas() -> Vec<WeakArea> {
    vec![
        WeakArea {
            topic: "Chemical Bonding".to_string(),
            subject: Subject::Chemistry,
            confidence: 45,
            last_score: 67,
            recommended_action: "Review theory and practice problems".to_string(),
        },
        WeakArea {
            topic: "Projectile Motion".to_string(),
            subject: Subject::Physics,
            confidence: 52,
            last_score: 74,
            recommended_action: "Work through example problems".to_string(),
        },
        WeakArea {
            topic: "Cellular Respiration".to_string(),
            subject: Subject::Biology,
            confidence: 68,
            last_score: 78,
            recommended_action: "Light review and quiz".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let plan = seed_study_plan();
        assert_eq!(plan.len(), 4);
        assert_eq!(
            plan.iter().filter(|p| p.priority == Priority::High).count(),
            2
        );
        assert!(plan.iter().all(|p| p.progress <= 100));

        let areas = seed_weak_areas();
        assert_eq!(areas.len(), 3);
        assert!(areas.iter().all(|a| a.confidence <= 100 && a.last_score <= 100));
    }
}
