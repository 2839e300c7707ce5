//! Packaging entity - A container or wrapper sold together with a recipe unit.
//!
//! A recipe references at most one packaging; its unit cost is added once
//! per recipe unit with no quantity multiplier.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Packaging database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "packagings")]
pub struct Model {
    /// Unique identifier for the packaging
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Business owner this record belongs to
    pub owner_id: String,
    /// Name of the packaging (e.g., "Kraft box", "Cellophane bag")
    pub name: String,
    /// Cost of a single packaging unit
    pub unit_cost: f64,
    /// When the packaging was created
    pub created_at: DateTime,
    /// When the packaging was last modified
    pub updated_at: DateTime,
}

/// Packaging is referenced by recipes without a foreign key, so deleting it
/// never cascades into them.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
