//! EUAC calculation and ranked comparison
//!
//! Both operations are pure: they read their inputs, allocate fresh output,
//! and hold no state between calls. Preconditions are validated up front so
//! an invalid rate or horizon surfaces as an error instead of a NaN that
//! would silently corrupt the ranking.

use super::types::{ComparisonReport, ComparisonSummary, EuacResult};
use crate::alternative::Alternative;
use crate::factors::{capital_recovery_factor, single_payment_pv_factor};
use log::debug;
use std::cmp::Ordering;
use thiserror::Error;

/// Validation failures for comparison inputs
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("empty alternative set: at least one alternative is required")]
    EmptyAlternatives,

    #[error("invalid useful life for '{name}': must be at least 1 period")]
    InvalidUsefulLife { name: String },

    #[error("invalid interest rate {rate}: must be a finite value >= 0")]
    InvalidRate { rate: f64 },

    #[error("non-finite monetary input for '{name}'")]
    NonFiniteInput { name: String },
}

fn validate(alternative: &Alternative, index: usize, rate: f64) -> Result<(), EngineError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(EngineError::InvalidRate { rate });
    }
    if alternative.useful_life == 0 {
        return Err(EngineError::InvalidUsefulLife {
            name: alternative.display_name(index),
        });
    }
    if !alternative.is_finite() {
        return Err(EngineError::NonFiniteInput {
            name: alternative.display_name(index),
        });
    }
    Ok(())
}

/// Calculate the equivalent uniform annual cost of one alternative
///
/// The investment is spread over the useful life via the capital recovery
/// factor. The salvage value, realized at the end of the horizon, is first
/// discounted to present value and then re-annualized with the same factor,
/// so a future lump sum becomes an equivalent per-period credit.
///
/// `index` is the alternative's zero-based position in its set, used only
/// for the positional default name.
pub fn calculate_euac(
    alternative: &Alternative,
    index: usize,
    rate: f64,
) -> Result<EuacResult, EngineError> {
    validate(alternative, index, rate)?;

    let crf = capital_recovery_factor(rate, alternative.useful_life);
    let annualized_investment = alternative.investment * crf;
    let annualized_salvage =
        alternative.salvage_value * crf * single_payment_pv_factor(rate, alternative.useful_life);
    let total_euac =
        annualized_investment + alternative.operating_cost - alternative.revenue - annualized_salvage;

    Ok(EuacResult {
        name: alternative.display_name(index),
        investment: alternative.investment,
        useful_life: alternative.useful_life,
        salvage_value: alternative.salvage_value,
        capital_recovery_factor: crf,
        annualized_investment,
        annualized_salvage,
        operating_cost: alternative.operating_cost,
        revenue: alternative.revenue,
        total_euac,
    })
}

/// Compare a set of alternatives at one discount rate and rank them from
/// most to least economical
///
/// `results` keeps input order; `ranking` is the same set sorted ascending
/// by total EUAC with a stable sort, so alternatives with equal totals keep
/// their relative input order.
pub fn compare_alternatives(
    alternatives: &[Alternative],
    rate: f64,
) -> Result<ComparisonReport, EngineError> {
    if alternatives.is_empty() {
        return Err(EngineError::EmptyAlternatives);
    }

    let results = alternatives
        .iter()
        .enumerate()
        .map(|(index, alt)| calculate_euac(alt, index, rate))
        .collect::<Result<Vec<_>, _>>()?;

    let mut ranking = results.clone();
    // Validation rules out NaN totals, so the partial comparison is total here
    ranking.sort_by(|a, b| {
        a.total_euac
            .partial_cmp(&b.total_euac)
            .unwrap_or(Ordering::Equal)
    });

    let best_alternative = ranking[0].clone();
    debug!(
        "Compared {} alternatives at rate {}: best is '{}' with EUAC {:.2}",
        alternatives.len(),
        rate,
        best_alternative.name,
        best_alternative.total_euac
    );

    let cost_gap = if ranking.len() >= 2 {
        (ranking[1].total_euac - ranking[0].total_euac).abs()
    } else {
        0.0
    };

    Ok(ComparisonReport {
        summary: ComparisonSummary {
            interest_rate: rate,
            alternative_count: alternatives.len(),
            cost_gap,
        },
        best_alternative,
        results,
        ranking,
    })
}
