//! Shared test utilities for `PricingBuddy`.
//!
//! Provides in-memory models for the pure engine tests and helpers that set
//! up an in-memory `SQLite` database for the repository tests.

use crate::{
    core::{expense, ingredient, packaging, profile, recipe},
    entities::{self, Unit},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Asserts two computed amounts are equal up to floating point noise.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn timestamp() -> chrono::NaiveDateTime {
    chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.naive_utc()
}

/// Unsaved ingredient model for pure tests.
pub fn ingredient_model(
    id: i64,
    name: &str,
    unit: Unit,
    cost_per_unit: f64,
) -> entities::ingredient::Model {
    entities::ingredient::Model {
        id,
        owner_id: "test_owner".to_string(),
        name: name.to_string(),
        unit,
        cost_per_unit,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

/// Unsaved packaging model for pure tests.
pub fn packaging_model(id: i64, name: &str, unit_cost: f64) -> entities::packaging::Model {
    entities::packaging::Model {
        id,
        owner_id: "test_owner".to_string(),
        name: name.to_string(),
        unit_cost,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

/// Unsaved fixed expense model for pure tests.
pub fn fixed_expense_model(
    id: i64,
    name: &str,
    monthly_value: f64,
) -> entities::fixed_expense::Model {
    entities::fixed_expense::Model {
        id,
        owner_id: "test_owner".to_string(),
        name: name.to_string(),
        monthly_value,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

/// Unsaved business profile for pure tests.
pub fn profile_model(monthly_working_hours: Option<f64>) -> entities::business_profile::Model {
    entities::business_profile::Model {
        id: 1,
        owner_id: "test_owner".to_string(),
        company_name: Some("Test Bakery".to_string()),
        monthly_working_hours,
        updated_at: timestamp(),
    }
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an ingredient with custom parameters.
pub async fn create_custom_ingredient(
    db: &DatabaseConnection,
    owner_id: &str,
    name: &str,
    unit: Unit,
    cost_per_unit: f64,
) -> Result<entities::ingredient::Model> {
    ingredient::create_ingredient(db, owner_id, name, unit, cost_per_unit).await
}

/// Creates a packaging with sensible defaults.
///
/// # Defaults
/// * `unit_cost`: 2.50
pub async fn create_test_packaging(
    db: &DatabaseConnection,
    owner_id: &str,
    name: &str,
) -> Result<entities::packaging::Model> {
    packaging::create_packaging(db, owner_id, name, 2.50).await
}

/// Creates a recipe from `(ingredient_id, quantity)` pairs.
pub async fn create_test_recipe(
    db: &DatabaseConnection,
    owner_id: &str,
    name: &str,
    lines: &[(i64, f64)],
    packaging_id: Option<i64>,
) -> Result<entities::recipe::Model> {
    let input = recipe::RecipeInput {
        name: name.to_string(),
        image_ref: None,
        packaging_id,
        lines: lines
            .iter()
            .map(|&(ingredient_id, quantity)| recipe::LineInput {
                ingredient_id,
                quantity,
            })
            .collect(),
    };
    recipe::create_recipe(db, owner_id, &input).await
}

/// Sets up the reference bakery for an owner:
/// flour 2 kg @ 4.50, sugar 1 kg @ 3.20, a 2.50 box, 1900 of monthly fixed
/// expenses and 160 working hours. Returns the "Cake" recipe.
pub async fn seed_cake_shop(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<entities::recipe::Model> {
    let flour = create_custom_ingredient(db, owner_id, "Flour", Unit::Kilogram, 4.50).await?;
    let sugar = create_custom_ingredient(db, owner_id, "Sugar", Unit::Kilogram, 3.20).await?;
    let box_ = create_test_packaging(db, owner_id, "Box").await?;

    expense::create_fixed_expense(db, owner_id, "Rent", 1200.0).await?;
    expense::create_fixed_expense(db, owner_id, "Electricity", 450.0).await?;
    expense::create_fixed_expense(db, owner_id, "Internet", 250.0).await?;
    profile::upsert_profile(db, owner_id, Some("Doce Lar".to_string()), Some(160.0)).await?;

    create_test_recipe(
        db,
        owner_id,
        "Cake",
        &[(flour.id, 2.0), (sugar.id, 1.0)],
        Some(box_.id),
    )
    .await
}
