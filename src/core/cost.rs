//! Cost aggregation for a single recipe.
//!
//! Costs are always computed from the live ingredient and packaging prices
//! carried by the [`RecipeSheet`]; nothing is cached on the recipe.

use crate::core::sheet::{RecipeLine, RecipeSheet, Reference, ReferenceKind, UnresolvedReference};

/// Cost of one recipe line: `quantity × cost_per_unit`, or 0 when the
/// ingredient is missing.
#[must_use]
pub fn line_cost(line: &RecipeLine) -> f64 {
    match &line.ingredient {
        Reference::Resolved(ingredient) => line.quantity * ingredient.cost_per_unit,
        Reference::Missing(_) => 0.0,
    }
}

/// Sum of every line cost of the recipe.
#[must_use]
pub fn ingredient_cost(recipe: &RecipeSheet) -> f64 {
    recipe.lines.iter().map(line_cost).sum()
}

/// Unit cost of the recipe's packaging, or 0 when it has none or it is missing.
#[must_use]
pub fn packaging_cost(recipe: &RecipeSheet) -> f64 {
    match &recipe.packaging {
        Some(Reference::Resolved(packaging)) => packaging.unit_cost,
        Some(Reference::Missing(_)) | None => 0.0,
    }
}

/// Every reference of the recipe that could not be resolved, lines first.
#[must_use]
pub fn unresolved_references(recipe: &RecipeSheet) -> Vec<UnresolvedReference> {
    let lines = recipe.lines.iter().filter_map(|line| match line.ingredient {
        Reference::Missing(id) => Some(UnresolvedReference {
            kind: ReferenceKind::Ingredient,
            id,
        }),
        Reference::Resolved(_) => None,
    });

    let packaging = match recipe.packaging {
        Some(Reference::Missing(id)) => Some(UnresolvedReference {
            kind: ReferenceKind::Packaging,
            id,
        }),
        _ => None,
    };

    lines.chain(packaging).collect()
}
