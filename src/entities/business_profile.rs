//! Business profile entity - Per-owner settings used by the pricing pipeline.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Business profile database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_profiles")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Business owner this profile describes, one profile per owner
    #[sea_orm(unique)]
    pub owner_id: String,
    /// Company name printed on reports
    pub company_name: Option<String>,
    /// Hours the business operates per month; pricing is blocked until set
    pub monthly_working_hours: Option<f64>,
    /// When the profile was last modified
    pub updated_at: DateTime,
}

/// `BusinessProfile` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
