//! Result types for EUAC comparisons

use serde::{Deserialize, Serialize};

/// Annualized cost breakdown for a single alternative
///
/// Echoes the input fields next to the computed figures so a renderer can
/// show the full per-alternative breakdown from one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EuacResult {
    /// Resolved display name (positional default applied when the input
    /// carried none)
    pub name: String,

    /// Initial outlay from the input
    pub investment: f64,

    /// Evaluation horizon in periods from the input
    pub useful_life: u32,

    /// Residual value from the input
    pub salvage_value: f64,

    /// Capital recovery factor at the comparison rate over the useful life
    pub capital_recovery_factor: f64,

    /// Investment converted to a uniform per-period charge
    pub annualized_investment: f64,

    /// Salvage value discounted to present and re-annualized as a
    /// per-period credit
    pub annualized_salvage: f64,

    /// Recurring per-period operating cost from the input
    pub operating_cost: f64,

    /// Recurring per-period income from the input
    pub revenue: f64,

    /// Equivalent uniform annual cost:
    /// annualized_investment + operating_cost - revenue - annualized_salvage
    pub total_euac: f64,
}

/// Headline figures for a comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Discount rate as supplied, a fraction (0.05 = 5%)
    pub interest_rate: f64,

    /// Number of alternatives evaluated
    pub alternative_count: usize,

    /// Gap between the two cheapest alternatives; 0 when fewer than two
    pub cost_gap: f64,
}

/// Full output of a comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Per-alternative results in original input order
    pub results: Vec<EuacResult>,

    /// Same results sorted ascending by total EUAC (stable: ties keep
    /// input order)
    pub ranking: Vec<EuacResult>,

    /// The cheapest alternative, ranking[0]
    pub best_alternative: EuacResult,

    /// Headline figures
    pub summary: ComparisonSummary,
}
