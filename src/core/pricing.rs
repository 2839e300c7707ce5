//! Pricing resolution - turns a recipe sheet into a suggested sale price.
//!
//! [`resolve`] is pure: it reads the recipe sheet, the owner's fixed
//! expenses, the business profile and the user's parameters, and returns
//! every intermediate figure of the calculation. Rounding is left to the
//! presentation layer. [`price_recipe`] is the async entry point that loads
//! those inputs from the database first.

use crate::{
    core::{
        allocation, cost,
        sheet::{RecipeSheet, UnresolvedReference},
        validation,
        variable::{self, VariableExpenses, VariableRates},
    },
    entities::{business_profile, fixed_expense},
    errors::Result,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

/// User-entered pricing parameters. Percentages are plain numbers, 8 means 8 %.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingParams {
    /// Minutes needed to make one unit of the recipe
    pub preparation_minutes: f64,
    /// Taxes charged on the base cost
    pub taxes_percent: f64,
    /// Commissions charged on the base cost
    pub commissions_percent: f64,
    /// Other percentage charges on the base cost
    pub others_percent: f64,
    /// Profit added on top of the total cost
    pub desired_profit_percent: f64,
}

impl Default for PricingParams {
    fn default() -> Self {
        Self {
            preparation_minutes: 30.0,
            taxes_percent: 8.0,
            commissions_percent: 5.0,
            others_percent: 2.0,
            desired_profit_percent: 30.0,
        }
    }
}

impl PricingParams {
    /// The variable-expense part of the parameters.
    #[must_use]
    pub const fn rates(&self) -> VariableRates {
        VariableRates {
            taxes_percent: self.taxes_percent,
            commissions_percent: self.commissions_percent,
            others_percent: self.others_percent,
        }
    }

    /// Builds parameters from the pricing form, where every field is typed
    /// text such as `"30"` or `"8,5%"`.
    ///
    /// # Errors
    /// Returns `InvalidInput` for text that is not a number or for values
    /// [`PricingParams::validate`] rejects.
    pub fn from_form(
        preparation_minutes: &str,
        taxes_percent: &str,
        commissions_percent: &str,
        others_percent: &str,
        desired_profit_percent: &str,
    ) -> Result<Self> {
        let params = Self {
            preparation_minutes: validation::parse_amount(
                "preparation_minutes",
                preparation_minutes,
            )?,
            taxes_percent: validation::parse_percent("taxes_percent", taxes_percent)?,
            commissions_percent: validation::parse_percent(
                "commissions_percent",
                commissions_percent,
            )?,
            others_percent: validation::parse_percent("others_percent", others_percent)?,
            desired_profit_percent: validation::parse_percent(
                "desired_profit_percent",
                desired_profit_percent,
            )?,
        };
        params.validate()?;
        Ok(params)
    }

    /// Rejects parameters that cannot produce a real price.
    ///
    /// # Errors
    /// Returns `InvalidInput` for a non-positive preparation time or a
    /// negative or non-finite percentage.
    pub fn validate(&self) -> Result<()> {
        validation::ensure_positive("preparation_minutes", self.preparation_minutes)?;
        validation::ensure_non_negative("taxes_percent", self.taxes_percent)?;
        validation::ensure_non_negative("commissions_percent", self.commissions_percent)?;
        validation::ensure_non_negative("others_percent", self.others_percent)?;
        validation::ensure_non_negative("desired_profit_percent", self.desired_profit_percent)?;
        Ok(())
    }
}

/// Full breakdown of a price calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingResult {
    /// Sum of the recipe's line costs
    pub ingredient_costs: f64,
    /// Unit cost of the recipe's packaging
    pub packaging_cost: f64,
    /// Fixed expenses per working hour
    pub hourly_rate: f64,
    /// Fixed expenses charged for the preparation time
    pub fixed_expense_allocation: f64,
    /// `ingredient_costs + packaging_cost + fixed_expense_allocation`
    pub base_cost: f64,
    /// Percentage charges on the base cost
    pub variable_expenses: VariableExpenses,
    /// `base_cost + variable_expenses.total`
    pub total_cost: f64,
    /// Profit added on top of the total cost
    pub desired_profit: f64,
    /// `total_cost + desired_profit`
    pub suggested_price: f64,
    /// References that could not be resolved; costs for them were taken as 0
    pub unresolved: Vec<UnresolvedReference>,
}

impl PricingResult {
    /// Profit as a share of the suggested price, 0 when the price is 0.
    #[must_use]
    pub fn profit_margin_percent(&self) -> f64 {
        if self.suggested_price == 0.0 {
            return 0.0;
        }
        self.desired_profit / self.suggested_price * 100.0
    }

    /// Whether every referenced ingredient and packaging was found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Prices one unit of `recipe`.
///
/// # Errors
/// - `ConfigurationIncomplete` when the profile is absent or has no positive
///   monthly working hours; no partial price is returned.
/// - `InvalidInput` when the preparation time is not positive or a
///   percentage is negative or not finite.
pub fn resolve(
    recipe: &RecipeSheet,
    fixed_expenses: &[fixed_expense::Model],
    profile: Option<&business_profile::Model>,
    params: &PricingParams,
) -> Result<PricingResult> {
    params.validate()?;

    let ingredient_costs = cost::ingredient_cost(recipe);
    let packaging_cost = cost::packaging_cost(recipe);

    let working_hours = profile.and_then(|p| p.monthly_working_hours);
    let hourly_rate = allocation::hourly_rate(fixed_expenses, working_hours)?;
    let fixed_expense_allocation = allocation::allocate(hourly_rate, params.preparation_minutes)?;

    let base_cost = ingredient_costs + packaging_cost + fixed_expense_allocation;
    let variable_expenses = variable::cascade(base_cost, &params.rates());
    let total_cost = base_cost + variable_expenses.total;

    let desired_profit = total_cost * (params.desired_profit_percent / 100.0);
    let suggested_price = total_cost + desired_profit;

    Ok(PricingResult {
        ingredient_costs,
        packaging_cost,
        hourly_rate,
        fixed_expense_allocation,
        base_cost,
        variable_expenses,
        total_cost,
        desired_profit,
        suggested_price,
        unresolved: cost::unresolved_references(recipe),
    })
}

/// Everything [`resolve`] needs for one recipe, as loaded from storage.
#[derive(Debug, Clone)]
pub struct PricingInputs {
    /// The recipe joined with its ingredients and packaging
    pub sheet: RecipeSheet,
    /// All of the owner's fixed expenses
    pub fixed_expenses: Vec<fixed_expense::Model>,
    /// The owner's business profile, if one was saved
    pub profile: Option<business_profile::Model>,
}

impl PricingInputs {
    /// Loads a recipe with the owner's expenses and profile.
    ///
    /// # Errors
    /// Returns an error if the recipe does not exist for this owner or a
    /// query fails.
    pub async fn load(db: &DatabaseConnection, owner_id: &str, recipe_id: i64) -> Result<Self> {
        let sheet = crate::core::recipe::load_recipe_sheet(db, owner_id, recipe_id).await?;
        let fixed_expenses = crate::core::expense::list_fixed_expenses(db, owner_id).await?;
        let profile = crate::core::profile::get_profile(db, owner_id).await?;

        Ok(Self {
            sheet,
            fixed_expenses,
            profile,
        })
    }

    /// Resolves the price, logging when it rests on incomplete data.
    ///
    /// # Errors
    /// Returns whatever [`resolve`] rejects.
    pub fn price(&self, params: &PricingParams) -> Result<PricingResult> {
        let recipe_id = self.sheet.id;
        let result = resolve(
            &self.sheet,
            &self.fixed_expenses,
            self.profile.as_ref(),
            params,
        )
        .inspect_err(|e| tracing::warn!("Pricing recipe {recipe_id} failed: {e}"))?;

        if !result.is_complete() {
            tracing::warn!(
                "Recipe {recipe_id} priced with {} unresolved reference(s); costs may be understated",
                result.unresolved.len()
            );
        }
        tracing::debug!(
            "Recipe {recipe_id} suggested price {:.4}",
            result.suggested_price
        );

        Ok(result)
    }
}

/// Loads a recipe with the owner's expenses and profile, then prices it.
///
/// # Errors
/// Returns an error if the recipe does not exist for this owner, a query
/// fails, or [`resolve`] rejects the inputs.
pub async fn price_recipe(
    db: &DatabaseConnection,
    owner_id: &str,
    recipe_id: i64,
    params: &PricingParams,
) -> Result<PricingResult> {
    PricingInputs::load(db, owner_id, recipe_id)
        .await?
        .price(params)
}
