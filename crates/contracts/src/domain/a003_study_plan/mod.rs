pub mod aggregate;
pub mod seed;

pub use aggregate::{ActivityKind, Priority, StudyPlanItem, StudyPlanItemId, WeakArea};
pub use seed::{seed_study_plan, seed_weak_areas};
