pub mod aggregate;
pub mod seed;

pub use aggregate::{Assessment, AssessmentId, AssessmentKind, AssessmentStatus, Difficulty};
pub use seed::seed_assessments;
