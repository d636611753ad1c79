// src/models.rs
pub mod analysis_state;
pub mod statistics;

pub use self::analysis_state::AnalysisState;
pub use self::statistics::Statistics;
