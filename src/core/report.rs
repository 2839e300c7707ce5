//! Report generation business logic.
//!
//! Builds the structured data handed to the PDF and spreadsheet exporters.
//! Reports carry a finished [`PricingResult`]; nothing here recomputes a
//! price. Rounding to two decimals happens only in the `format_*` helpers.

use crate::{
    core::{
        cost,
        pricing::{PricingInputs, PricingParams, PricingResult},
        sheet::{RecipeSheet, Reference},
    },
    entities::Unit,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde::Serialize;

/// One line of the ingredient detail sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientDetailRow {
    /// Recipe the line belongs to
    pub recipe_name: String,
    /// Ingredient name, `None` when the ingredient no longer exists
    pub ingredient_name: Option<String>,
    /// Quantity used
    pub quantity: f64,
    /// Unit of the quantity, `None` when the ingredient no longer exists
    pub unit: Option<Unit>,
    /// Current cost of one unit
    pub unit_cost: f64,
    /// `quantity × unit_cost`
    pub line_cost: f64,
}

/// A priced recipe ready for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingReport {
    /// Name of the priced recipe
    pub recipe_name: String,
    /// Company printed in the header
    pub company_name: Option<String>,
    /// Parameters the price was computed with
    pub params: PricingParams,
    /// The computed breakdown
    pub result: PricingResult,
    /// Per-ingredient detail
    pub ingredient_rows: Vec<IngredientDetailRow>,
}

/// Flattened pricing figures for one recipe, one spreadsheet row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingRow {
    /// Recipe name
    pub recipe_name: String,
    /// Ingredient cost
    pub ingredient_costs: f64,
    /// Packaging cost
    pub packaging_cost: f64,
    /// Fixed expenses charged for the preparation time
    pub fixed_expense_allocation: f64,
    /// Taxes
    pub taxes: f64,
    /// Commissions
    pub commissions: f64,
    /// Other charges
    pub others: f64,
    /// Total cost before profit
    pub total_cost: f64,
    /// Profit
    pub desired_profit: f64,
    /// Suggested sale price
    pub suggested_price: f64,
    /// Profit as a share of the price
    pub profit_margin_percent: f64,
    /// Preparation time used for the allocation
    pub preparation_minutes: f64,
}

/// Totals over a batch of reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    /// Company printed in the header
    pub company_name: Option<String>,
    /// Date the batch was generated
    pub generated_on: NaiveDate,
    /// Number of recipes in the batch
    pub recipe_count: usize,
    /// Sum of suggested prices
    pub total_suggested_price: f64,
    /// Sum of total costs
    pub total_cost: f64,
    /// Sum of desired profits
    pub total_profit: f64,
    /// Total profit over total price, as a percentage
    pub average_margin_percent: f64,
}

/// Recipe listing row: cost without fixed or variable expenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCostRow {
    /// Recipe name
    pub recipe_name: String,
    /// Number of ingredient lines
    pub line_count: usize,
    /// Ingredient cost
    pub ingredient_cost: f64,
    /// Packaging cost
    pub packaging_cost: f64,
    /// Ingredient plus packaging cost
    pub total_cost: f64,
}

/// Detail rows for every line of a recipe.
#[must_use]
pub fn ingredient_rows(recipe: &RecipeSheet) -> Vec<IngredientDetailRow> {
    recipe
        .lines
        .iter()
        .map(|line| {
            let (ingredient_name, unit, unit_cost) = match &line.ingredient {
                Reference::Resolved(ingredient) => (
                    Some(ingredient.name.clone()),
                    Some(ingredient.unit),
                    ingredient.cost_per_unit,
                ),
                Reference::Missing(_) => (None, None, 0.0),
            };
            IngredientDetailRow {
                recipe_name: recipe.name.clone(),
                ingredient_name,
                quantity: line.quantity,
                unit,
                unit_cost,
                line_cost: cost::line_cost(line),
            }
        })
        .collect()
}

impl PricingReport {
    /// Bundles a finished pricing result with what the exporters display.
    #[must_use]
    pub fn new(
        recipe: &RecipeSheet,
        company_name: Option<String>,
        params: PricingParams,
        result: PricingResult,
    ) -> Self {
        Self {
            recipe_name: recipe.name.clone(),
            company_name,
            params,
            result,
            ingredient_rows: ingredient_rows(recipe),
        }
    }

    /// Flattens the report into one row.
    #[must_use]
    pub fn pricing_row(&self) -> PricingRow {
        let result = &self.result;
        PricingRow {
            recipe_name: self.recipe_name.clone(),
            ingredient_costs: result.ingredient_costs,
            packaging_cost: result.packaging_cost,
            fixed_expense_allocation: result.fixed_expense_allocation,
            taxes: result.variable_expenses.taxes,
            commissions: result.variable_expenses.commissions,
            others: result.variable_expenses.others,
            total_cost: result.total_cost,
            desired_profit: result.desired_profit,
            suggested_price: result.suggested_price,
            profit_margin_percent: result.profit_margin_percent(),
            preparation_minutes: self.params.preparation_minutes,
        }
    }
}

impl RecipeCostRow {
    /// Listing row for a recipe.
    #[must_use]
    pub fn from_sheet(recipe: &RecipeSheet) -> Self {
        let ingredient_cost = cost::ingredient_cost(recipe);
        let packaging_cost = cost::packaging_cost(recipe);
        Self {
            recipe_name: recipe.name.clone(),
            line_count: recipe.lines.len(),
            ingredient_cost,
            packaging_cost,
            total_cost: ingredient_cost + packaging_cost,
        }
    }
}

/// Totals over a batch of reports. The company name is taken from the first
/// report.
#[must_use]
pub fn summarize_batch(reports: &[PricingReport], generated_on: NaiveDate) -> BatchSummary {
    let total_suggested_price: f64 = reports.iter().map(|r| r.result.suggested_price).sum();
    let total_cost: f64 = reports.iter().map(|r| r.result.total_cost).sum();
    let total_profit: f64 = reports.iter().map(|r| r.result.desired_profit).sum();

    let average_margin_percent = if total_suggested_price == 0.0 {
        0.0
    } else {
        total_profit / total_suggested_price * 100.0
    };

    BatchSummary {
        company_name: reports.first().and_then(|r| r.company_name.clone()),
        generated_on,
        recipe_count: reports.len(),
        total_suggested_price,
        total_cost,
        total_profit,
        average_margin_percent,
    }
}

/// Prices a recipe and wraps the result with the owner's company name.
///
/// # Errors
/// Returns an error if the recipe cannot be loaded or priced.
pub async fn generate_pricing_report(
    db: &DatabaseConnection,
    owner_id: &str,
    recipe_id: i64,
    params: PricingParams,
) -> Result<PricingReport> {
    let inputs = PricingInputs::load(db, owner_id, recipe_id).await?;
    let result = inputs.price(&params)?;
    let company_name = inputs.profile.and_then(|p| p.company_name);

    Ok(PricingReport::new(&inputs.sheet, company_name, params, result))
}

/// Formats a monetary value like "R$ 12.20".
#[must_use]
pub fn format_currency(value: f64) -> String {
    format!("R$ {value:.2}")
}

/// Formats a percentage with one decimal, like "23.1%".
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{errors::Error, test_utils::*};

    fn cake() -> RecipeSheet {
        RecipeSheet::new(1, "Cake")
            .with_line(ingredient_model(1, "Flour", Unit::Kilogram, 4.50), 2.0)
            .with_line(ingredient_model(2, "Sugar", Unit::Kilogram, 3.20), 1.0)
            .with_packaging(Reference::Resolved(packaging_model(1, "Box", 2.50)))
    }

    fn cake_report() -> Result<PricingReport> {
        let expenses = vec![fixed_expense_model(1, "Rent", 1900.0)];
        let profile = profile_model(Some(160.0));
        let params = PricingParams::default();
        let result = crate::core::pricing::resolve(&cake(), &expenses, Some(&profile), &params)?;
        Ok(PricingReport::new(
            &cake(),
            Some("Doce Lar".to_string()),
            params,
            result,
        ))
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(30.853_062_5), "R$ 30.85");
        assert_eq!(format_currency(0.0), "R$ 0.00");
        assert_eq!(format_currency(12.2), "R$ 12.20");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(23.076_923), "23.1%");
    }

    #[test]
    fn test_pricing_row_copies_the_result() -> Result<()> {
        let report = cake_report()?;
        let row = report.pricing_row();

        assert_eq!(row.recipe_name, "Cake");
        assert_eq!(row.ingredient_costs, report.result.ingredient_costs);
        assert_eq!(row.fixed_expense_allocation, 5.9375);
        assert_eq!(row.taxes, report.result.variable_expenses.taxes);
        assert_eq!(row.total_cost, report.result.total_cost);
        assert_eq!(row.suggested_price, report.result.suggested_price);
        assert_eq!(
            row.profit_margin_percent,
            report.result.profit_margin_percent()
        );
        assert_eq!(row.preparation_minutes, 30.0);
        assert_eq!(format_currency(row.suggested_price), "R$ 30.85");
        Ok(())
    }

    #[test]
    fn test_ingredient_rows() {
        let recipe = cake().with_missing_line(9, 4.0);
        let rows = ingredient_rows(&recipe);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].ingredient_name.as_deref(), Some("Flour"));
        assert_eq!(rows[0].unit, Some(Unit::Kilogram));
        assert_eq!(rows[0].line_cost, 9.0);
        assert_eq!(rows[2].ingredient_name, None);
        assert_eq!(rows[2].quantity, 4.0);
        assert_eq!(rows[2].line_cost, 0.0);
    }

    #[test]
    fn test_recipe_cost_row() {
        let row = RecipeCostRow::from_sheet(&cake());
        assert_eq!(row.line_count, 2);
        assert_eq!(row.packaging_cost, 2.5);
        assert_close(row.total_cost, 14.70);
    }

    #[test]
    fn test_summarize_batch() -> Result<()> {
        let first = cake_report()?;
        let second = cake_report()?;
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).ok_or(Error::Config {
            message: "bad test date".to_string(),
        })?;

        let summary = summarize_batch(&[first.clone(), second], date);
        assert_eq!(summary.recipe_count, 2);
        assert_eq!(summary.company_name.as_deref(), Some("Doce Lar"));
        assert_eq!(summary.generated_on, date);
        assert_close(summary.total_suggested_price, 2.0 * first.result.suggested_price);
        assert_close(summary.total_cost, 2.0 * first.result.total_cost);
        assert_close(summary.total_profit, 2.0 * first.result.desired_profit);
        assert_close(
            summary.average_margin_percent,
            first.result.profit_margin_percent(),
        );
        Ok(())
    }

    #[test]
    fn test_summarize_empty_batch() -> Result<()> {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).ok_or(Error::Config {
            message: "bad test date".to_string(),
        })?;
        let summary = summarize_batch(&[], date);
        assert_eq!(summary.recipe_count, 0);
        assert_eq!(summary.average_margin_percent, 0.0);
        assert!(summary.company_name.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_pricing_report_integration() -> Result<()> {
        let db = setup_test_db().await?;
        let recipe = seed_cake_shop(&db, "owner").await?;

        let report =
            generate_pricing_report(&db, "owner", recipe.id, PricingParams::default()).await?;
        assert_eq!(report.recipe_name, "Cake");
        assert_eq!(report.company_name.as_deref(), Some("Doce Lar"));
        assert_eq!(report.ingredient_rows.len(), 2);
        assert_close(report.result.suggested_price, 30.853_062_5);
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_pricing_report_rejects_negative_profit() -> Result<()> {
        let db = setup_test_db().await?;
        let recipe = seed_cake_shop(&db, "owner").await?;
        let params = PricingParams {
            desired_profit_percent: -50.0,
            ..PricingParams::default()
        };

        let result = generate_pricing_report(&db, "owner", recipe.id, params).await;
        assert!(matches!(
            result,
            Err(Error::InvalidInput {
                field: "desired_profit_percent",
                ..
            })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_pricing_report_with_deleted_ingredient() -> Result<()> {
        let db = setup_test_db().await?;
        let recipe = seed_cake_shop(&db, "owner").await?;
        let flour = crate::core::ingredient::list_ingredients(&db, "owner")
            .await?
            .into_iter()
            .find(|i| i.name == "Flour")
            .ok_or(Error::NotFound {
                entity: "ingredient",
                id: 0,
            })?;
        crate::core::ingredient::delete_ingredient(&db, "owner", flour.id).await?;

        let report =
            generate_pricing_report(&db, "owner", recipe.id, PricingParams::default()).await?;
        assert!(!report.result.is_complete());
        assert_eq!(report.ingredient_rows[0].ingredient_name, None);
        assert_close(report.result.ingredient_costs, 3.20);
        Ok(())
    }
}
