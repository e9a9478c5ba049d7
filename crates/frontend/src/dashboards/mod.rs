pub mod d100_overview;
pub mod d101_study_plan;
