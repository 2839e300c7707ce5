//! Recipe sheets - recipes joined with the records they reference.
//!
//! Storage hands the engine a [`RecipeSheet`] where every ingredient and the
//! packaging are wrapped in a [`Reference`]. A reference whose record could
//! not be found stays [`Reference::Missing`], so cost code has to take that
//! branch explicitly instead of reading a zero.

use crate::entities::{ingredient, packaging};
use serde::Serialize;

/// A reference to another record that may or may not have been found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Reference<T> {
    /// The record was loaded.
    Resolved(T),
    /// Only the id is known; the record no longer exists.
    Missing(i64),
}

impl<T> Reference<T> {
    /// The loaded record, if any.
    pub const fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Missing(_) => None,
        }
    }
}

/// Kind of record a reference points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferenceKind {
    /// An ingredient used by a recipe line
    Ingredient,
    /// The packaging of a recipe
    Packaging,
}

impl ReferenceKind {
    /// Lower-case name used in errors and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Packaging => "packaging",
        }
    }
}

/// A reference that could not be resolved while costing a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    /// What kind of record is missing
    pub kind: ReferenceKind,
    /// Id of the missing record
    pub id: i64,
}

/// One ingredient quantity of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeLine {
    /// The ingredient, as currently stored
    pub ingredient: Reference<ingredient::Model>,
    /// Quantity in the ingredient's unit
    pub quantity: f64,
}

impl RecipeLine {
    /// Id of the referenced ingredient, whether or not it was found.
    #[must_use]
    pub const fn ingredient_id(&self) -> i64 {
        match &self.ingredient {
            Reference::Resolved(ingredient) => ingredient.id,
            Reference::Missing(id) => *id,
        }
    }
}

/// A recipe together with its lines and packaging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSheet {
    /// Recipe id
    pub id: i64,
    /// Recipe name
    pub name: String,
    /// Ingredient lines in recipe order
    pub lines: Vec<RecipeLine>,
    /// Packaging, when the recipe has one
    pub packaging: Option<Reference<packaging::Model>>,
}

impl RecipeSheet {
    /// Creates a sheet with no lines and no packaging.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            lines: Vec::new(),
            packaging: None,
        }
    }

    /// Adds a line for a loaded ingredient.
    #[must_use]
    pub fn with_line(mut self, ingredient: ingredient::Model, quantity: f64) -> Self {
        self.lines.push(RecipeLine {
            ingredient: Reference::Resolved(ingredient),
            quantity,
        });
        self
    }

    /// Adds a line whose ingredient could not be found.
    #[must_use]
    pub fn with_missing_line(mut self, ingredient_id: i64, quantity: f64) -> Self {
        self.lines.push(RecipeLine {
            ingredient: Reference::Missing(ingredient_id),
            quantity,
        });
        self
    }

    /// Sets the packaging reference.
    #[must_use]
    pub fn with_packaging(mut self, packaging: Reference<packaging::Model>) -> Self {
        self.packaging = Some(packaging);
        self
    }
}
