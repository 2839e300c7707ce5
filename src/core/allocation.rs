//! Fixed-expense allocation.
//!
//! The business's monthly overhead is turned into an hourly rate over its
//! working hours, and each recipe is charged for the time it takes to make.

use crate::{
    entities::fixed_expense,
    errors::{Error, Result},
};

/// Monthly fixed expenses divided by monthly working hours.
///
/// An empty expense list gives a rate of 0.
///
/// # Errors
/// Returns `ConfigurationIncomplete` when the working hours are missing,
/// zero, negative or not finite.
pub fn hourly_rate(
    fixed_expenses: &[fixed_expense::Model],
    monthly_working_hours: Option<f64>,
) -> Result<f64> {
    let hours = match monthly_working_hours {
        Some(hours) if hours.is_finite() && hours > 0.0 => hours,
        Some(_) | None => {
            return Err(Error::ConfigurationIncomplete {
                message: "set the monthly working hours in the business profile before pricing"
                    .to_string(),
            });
        }
    };

    let monthly_total: f64 = fixed_expenses.iter().map(|e| e.monthly_value).sum();
    Ok(monthly_total / hours)
}

/// Share of the hourly rate charged for `preparation_minutes` of work.
///
/// # Errors
/// Returns `InvalidInput` when the preparation time is zero, negative or not
/// finite; such a time has no meaningful allocation.
pub fn allocate(hourly_rate: f64, preparation_minutes: f64) -> Result<f64> {
    if !preparation_minutes.is_finite() || preparation_minutes <= 0.0 {
        return Err(Error::invalid("preparation_minutes", preparation_minutes));
    }
    Ok(hourly_rate * (preparation_minutes / 60.0))
}
