//! EUAC System - Engineering-economy comparison engine for investment alternatives
//!
//! This library provides:
//! - Compound-interest factor functions (capital recovery, present value)
//! - Equivalent Uniform Annual Cost (EUAC) calculation per alternative
//! - Ranked comparison of competing alternatives under a discount rate
//! - Rate-sensitivity sweeps across a grid of candidate rates

pub mod factors;
pub mod alternative;
pub mod engine;
pub mod sweep;

// Re-export commonly used types
pub use alternative::Alternative;
pub use engine::{calculate_euac, compare_alternatives, ComparisonReport, EngineError, EuacResult};
pub use sweep::RateSweep;
