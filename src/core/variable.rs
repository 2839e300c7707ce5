//! Variable expenses: percentage charges computed on the base cost.
//!
//! Taxes, commissions and other charges are each taken from the same base
//! cost and added together. They are never compounded on each other.

use serde::{Deserialize, Serialize};

/// Percentages applied to the base cost. `8.0` means 8 %.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableRates {
    /// Taxes percentage
    pub taxes_percent: f64,
    /// Sales commissions percentage
    pub commissions_percent: f64,
    /// Any other percentage-based charge
    pub others_percent: f64,
}

/// Amounts produced by [`cascade`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableExpenses {
    /// Taxes on the base cost
    pub taxes: f64,
    /// Commissions on the base cost
    pub commissions: f64,
    /// Other charges on the base cost
    pub others: f64,
    /// `taxes + commissions + others`
    pub total: f64,
}

/// `base × percent / 100`, with negative or NaN percentages counted as 0.
fn percent_of(base_cost: f64, percent: f64) -> f64 {
    if percent.is_nan() || percent < 0.0 {
        return 0.0;
    }
    base_cost * (percent / 100.0)
}

/// Applies every rate to `base_cost` independently and sums the results.
#[must_use]
pub fn cascade(base_cost: f64, rates: &VariableRates) -> VariableExpenses {
    let taxes = percent_of(base_cost, rates.taxes_percent);
    let commissions = percent_of(base_cost, rates.commissions_percent);
    let others = percent_of(base_cost, rates.others_percent);

    VariableExpenses {
        taxes,
        commissions,
        others,
        total: taxes + commissions + others,
    }
}
