//! Rate sweep for batch comparisons
//!
//! Holds one alternative set and re-runs the comparison across many
//! candidate discount rates, so a caller can see where the ranking flips
//! without rebuilding inputs per run.

use crate::alternative::Alternative;
use crate::engine::{compare_alternatives, ComparisonReport, EngineError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One comparison run at one candidate rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatePoint {
    /// Discount rate for this run, a fraction
    pub rate: f64,

    /// Full comparison report at that rate
    pub report: ComparisonReport,
}

/// Pre-loaded sweep runner over a fixed alternative set
///
/// # Example
/// ```ignore
/// let sweep = RateSweep::new(alternatives);
/// let points = sweep.run(&[0.03, 0.05, 0.08])?;
/// for p in &points {
///     println!("{}: {}", p.rate, p.report.best_alternative.name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RateSweep {
    alternatives: Vec<Alternative>,
}

impl RateSweep {
    /// Create a sweep over the given alternative set
    pub fn new(alternatives: Vec<Alternative>) -> Self {
        Self { alternatives }
    }

    /// Run the comparison at each rate, in parallel; output preserves the
    /// order of `rates`. Fails on the first invalid rate or alternative.
    pub fn run(&self, rates: &[f64]) -> Result<Vec<RatePoint>, EngineError> {
        rates
            .par_iter()
            .map(|&rate| {
                compare_alternatives(&self.alternatives, rate)
                    .map(|report| RatePoint { rate, report })
            })
            .collect()
    }

    /// Run an evenly spaced sweep from `start` to `end` inclusive
    pub fn run_range(&self, start: f64, end: f64, steps: usize) -> Result<Vec<RatePoint>, EngineError> {
        let rates: Vec<f64> = if steps <= 1 {
            vec![start]
        } else {
            (0..steps)
                .map(|i| start + (end - start) * i as f64 / (steps - 1) as f64)
                .collect()
        };
        self.run(&rates)
    }

    /// Get reference to the alternative set for inspection
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn competing_machines() -> Vec<Alternative> {
        // Low capital / high running cost vs high capital / low running cost:
        // the winner depends on the discount rate
        vec![
            Alternative {
                operating_cost: 9_000.0,
                ..Alternative::new("Cheap Machine", 10_000.0, 10)
            },
            Alternative {
                operating_cost: 4_000.0,
                ..Alternative::new("Durable Machine", 50_000.0, 10)
            },
        ]
    }

    #[test]
    fn test_sweep_preserves_rate_order() {
        let sweep = RateSweep::new(competing_machines());
        let rates = [0.10, 0.02, 0.06];
        let points = sweep.run(&rates).unwrap();

        assert_eq!(points.len(), 3);
        for (point, &rate) in points.iter().zip(rates.iter()) {
            assert_eq!(point.rate, rate);
            assert_relative_eq!(point.report.summary.interest_rate, rate);
        }
    }

    #[test]
    fn test_winner_flips_with_rate() {
        // At 0%: cheap = 1000 + 9000 = 10000, durable = 5000 + 4000 = 9000.
        // At 15%: crf(0.15,10) ≈ 0.19925; cheap ≈ 10992, durable ≈ 13963.
        let sweep = RateSweep::new(competing_machines());
        let points = sweep.run(&[0.0, 0.15]).unwrap();

        assert_eq!(points[0].report.best_alternative.name, "Durable Machine");
        assert_eq!(points[1].report.best_alternative.name, "Cheap Machine");
    }

    #[test]
    fn test_run_range_endpoints() {
        let sweep = RateSweep::new(competing_machines());
        let points = sweep.run_range(0.02, 0.10, 5).unwrap();

        assert_eq!(points.len(), 5);
        assert_relative_eq!(points[0].rate, 0.02);
        assert_relative_eq!(points[4].rate, 0.10, epsilon = 1e-12);
        assert_relative_eq!(points[2].rate, 0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_sweep_propagates_engine_errors() {
        let sweep = RateSweep::new(competing_machines());
        assert!(sweep.run(&[0.05, -0.01]).is_err());

        let empty = RateSweep::new(Vec::new());
        assert!(matches!(
            empty.run(&[0.05]),
            Err(EngineError::EmptyAlternatives)
        ));
    }
}
