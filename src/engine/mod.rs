//! Comparison engine: per-alternative EUAC and ranked reports

mod compare;
mod types;

pub use compare::{calculate_euac, compare_alternatives, EngineError};
pub use types::{ComparisonReport, ComparisonSummary, EuacResult};
