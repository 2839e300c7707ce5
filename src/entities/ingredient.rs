//! Ingredient entity - A raw material bought by the business.
//!
//! Each ingredient has a measurement unit and the current cost of one unit.
//! Recipes always read the live cost, so editing an ingredient reprices every
//! recipe that uses it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Measurement units an ingredient can be bought in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Unit {
    /// Kilogram
    #[sea_orm(string_value = "kg")]
    Kilogram,
    /// Gram
    #[sea_orm(string_value = "g")]
    Gram,
    /// Liter
    #[sea_orm(string_value = "l")]
    Liter,
    /// Milliliter
    #[sea_orm(string_value = "ml")]
    Milliliter,
    /// Single piece
    #[sea_orm(string_value = "un")]
    Piece,
    /// Dozen
    #[sea_orm(string_value = "dúzia")]
    Dozen,
}

impl Unit {
    /// Short label used for storage and display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kilogram => "kg",
            Self::Gram => "g",
            Self::Liter => "l",
            Self::Milliliter => "ml",
            Self::Piece => "un",
            Self::Dozen => "dúzia",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = crate::errors::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(Self::Kilogram),
            "g" => Ok(Self::Gram),
            "l" => Ok(Self::Liter),
            "ml" => Ok(Self::Milliliter),
            "un" | "unidade" => Ok(Self::Piece),
            "dúzia" | "duzia" => Ok(Self::Dozen),
            _ => Err(crate::errors::Error::invalid("unit", s)),
        }
    }
}

/// Ingredient database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    /// Unique identifier for the ingredient
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Business owner this record belongs to
    pub owner_id: String,
    /// Name of the ingredient (e.g., "Flour", "Eggs")
    pub name: String,
    /// Unit the cost and recipe quantities are expressed in
    pub unit: Unit,
    /// Current cost of one unit
    pub cost_per_unit: f64,
    /// When the ingredient was created
    pub created_at: DateTime,
    /// When the ingredient was last modified
    pub updated_at: DateTime,
}

/// Ingredients are referenced by recipe lines without a foreign key, so
/// deleting one never cascades into recipes.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
