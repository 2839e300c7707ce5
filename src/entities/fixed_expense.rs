//! Fixed expense entity - Recurring monthly overhead (rent, utilities, salaries).
//!
//! Fixed expenses are never linked to recipes. The whole set belonging to an
//! owner is spread over the business's working hours when pricing.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fixed expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fixed_expenses")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Business owner this record belongs to
    pub owner_id: String,
    /// Name of the expense (e.g., "Rent", "Electricity")
    pub name: String,
    /// Amount paid per month
    pub monthly_value: f64,
    /// When the expense was created
    pub created_at: DateTime,
    /// When the expense was last modified
    pub updated_at: DateTime,
}

/// `FixedExpense` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
