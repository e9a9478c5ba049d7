pub mod common;

pub mod a001_document;
pub mod a002_assessment;
pub mod a003_study_plan;
