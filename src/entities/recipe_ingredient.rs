//! Recipe line entity - One ingredient quantity inside a recipe.
//!
//! Lines have no identity outside their recipe. The ingredient is referenced
//! by id only, so a deleted ingredient leaves a dangling line behind.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recipe line database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipe_ingredients")]
pub struct Model {
    /// Unique identifier for the row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Recipe this line belongs to
    pub recipe_id: i64,
    /// Ingredient consumed by this line
    pub ingredient_id: i64,
    /// Quantity in the ingredient's unit
    pub quantity: f64,
    /// Position of the line within the recipe
    pub position: i32,
}

/// Defines relationships between recipe lines and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one recipe
    #[sea_orm(
        belongs_to = "super::recipe::Entity",
        from = "Column::RecipeId",
        to = "super::recipe::Column::Id",
        on_delete = "Cascade"
    )]
    Recipe,
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
