//! Investment alternative input record

use serde::{Deserialize, Serialize};

/// A single investment alternative to be annualized and ranked
///
/// Constructed by the caller (CLI, loader, or API consumer) and never
/// mutated by the engine. Monetary fields share one implicit currency;
/// `operating_cost` and `revenue` are per-period amounts, `salvage_value`
/// is realized once at the end of `useful_life`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    /// Display name; when None or empty the engine assigns a positional
    /// default ("Alternative 1", "Alternative 2", ...)
    #[serde(default)]
    pub name: Option<String>,

    /// Initial outlay at period 0, expected > 0
    pub investment: f64,

    /// Evaluation horizon in periods, expected >= 1
    pub useful_life: u32,

    /// Residual value recovered at the end of the useful life
    #[serde(default)]
    pub salvage_value: f64,

    /// Recurring per-period operating cost
    #[serde(default)]
    pub operating_cost: f64,

    /// Recurring per-period income
    #[serde(default)]
    pub revenue: f64,
}

impl Alternative {
    /// Create an alternative with only the required fields; salvage,
    /// operating cost and revenue default to zero
    pub fn new(name: impl Into<String>, investment: f64, useful_life: u32) -> Self {
        Self {
            name: Some(name.into()),
            investment,
            useful_life,
            salvage_value: 0.0,
            operating_cost: 0.0,
            revenue: 0.0,
        }
    }

    /// Resolve the display name, falling back to the positional default
    /// used by the comparison report (`index` is zero-based)
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(n) if !n.is_empty() => n.clone(),
            _ => format!("Alternative {}", index + 1),
        }
    }

    /// True when every monetary field is a finite number
    pub fn is_finite(&self) -> bool {
        self.investment.is_finite()
            && self.salvage_value.is_finite()
            && self.operating_cost.is_finite()
            && self.revenue.is_finite()
    }
}
