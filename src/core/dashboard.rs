//! Dashboard aggregates.
//!
//! These are read-only summaries over the owner's recipes and expenses. The
//! per-recipe chart cost deliberately leaves out the fixed-expense
//! allocation, so it is not the same figure as [`crate::core::pricing`]
//! produces; keep the two separate.

use crate::{
    core::{cost, expense, ingredient, packaging, recipe, sheet::RecipeSheet},
    entities::fixed_expense,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

/// Chart entry for one recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCost {
    /// Recipe name
    pub name: String,
    /// Ingredient plus packaging cost
    pub cost: f64,
}

/// Chart entry for one fixed expense.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseShare {
    /// Expense name
    pub name: String,
    /// Monthly value as stored
    pub value: f64,
}

/// Figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Number of recipes
    pub recipe_count: u64,
    /// Number of ingredients
    pub ingredient_count: u64,
    /// Number of packagings
    pub packaging_count: u64,
    /// Sum of all monthly fixed expenses
    pub total_fixed_expenses: f64,
    /// Cost chart, at most `chart_limit` recipes
    pub recipe_costs: Vec<RecipeCost>,
    /// Expense chart, at most `chart_limit` expenses
    pub expense_distribution: Vec<ExpenseShare>,
}

/// Sum of every monthly value; negative or non-finite values count as 0.
#[must_use]
pub fn total_fixed_expenses(expenses: &[fixed_expense::Model]) -> f64 {
    expenses
        .iter()
        .map(|e| e.monthly_value)
        .filter(|value| value.is_finite() && *value > 0.0)
        .sum()
}

/// Ingredient plus packaging cost of a recipe, without fixed expenses.
#[must_use]
pub fn recipe_chart_cost(recipe: &RecipeSheet) -> f64 {
    cost::ingredient_cost(recipe) + cost::packaging_cost(recipe)
}

/// `(name, monthly_value)` for each expense, unmodified and in order.
#[must_use]
pub fn expense_distribution(expenses: &[fixed_expense::Model]) -> Vec<ExpenseShare> {
    expenses
        .iter()
        .map(|e| ExpenseShare {
            name: e.name.clone(),
            value: e.monthly_value,
        })
        .collect()
}

/// Builds the dashboard from already-loaded records.
#[must_use]
pub fn summarize(
    recipes: &[RecipeSheet],
    ingredient_count: u64,
    packaging_count: u64,
    expenses: &[fixed_expense::Model],
    chart_limit: usize,
) -> DashboardSummary {
    let recipe_costs = recipes
        .iter()
        .take(chart_limit)
        .map(|recipe| RecipeCost {
            name: recipe.name.clone(),
            cost: recipe_chart_cost(recipe),
        })
        .collect();

    let mut distribution = expense_distribution(expenses);
    distribution.truncate(chart_limit);

    DashboardSummary {
        recipe_count: recipes.len() as u64,
        ingredient_count,
        packaging_count,
        total_fixed_expenses: total_fixed_expenses(expenses),
        recipe_costs,
        expense_distribution: distribution,
    }
}

/// Loads the owner's records and builds the dashboard.
///
/// # Errors
/// Returns an error if any query fails.
pub async fn load_dashboard(
    db: &DatabaseConnection,
    owner_id: &str,
    chart_limit: usize,
) -> Result<DashboardSummary> {
    let recipes = recipe::load_recipe_sheets(db, owner_id).await?;
    let expenses = expense::list_fixed_expenses(db, owner_id).await?;
    let ingredient_count = ingredient::count_ingredients(db, owner_id).await?;
    let packaging_count = packaging::count_packagings(db, owner_id).await?;

    let summary = summarize(
        &recipes,
        ingredient_count,
        packaging_count,
        &expenses,
        chart_limit,
    );
    tracing::debug!(
        "Dashboard for {owner_id}: {} recipes, {:.2} monthly fixed expenses",
        summary.recipe_count,
        summary.total_fixed_expenses
    );
    Ok(summary)
}
