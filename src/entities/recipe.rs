//! Recipe entity - A sellable item composed of ingredient quantities.
//!
//! The ingredient lines live in `recipe_ingredients` and are replaced
//! wholesale whenever the recipe is edited.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recipe database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    /// Unique identifier for the recipe
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Business owner this record belongs to
    pub owner_id: String,
    /// Name of the recipe (e.g., "Chocolate cake")
    pub name: String,
    /// Opaque handle to an uploaded image, if any
    pub image_ref: Option<String>,
    /// Optional packaging sold with each unit
    pub packaging_id: Option<i64>,
    /// When the recipe was created
    pub created_at: DateTime,
    /// When the recipe was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between Recipe and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One recipe has many ingredient lines
    #[sea_orm(has_many = "super::recipe_ingredient::Entity")]
    Lines,
}

impl Related<super::recipe_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
