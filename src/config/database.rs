//! Database configuration module for `PricingBuddy`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust models.

use crate::entities::{
    BusinessProfile, FixedExpense, Ingredient, Packaging, Recipe, RecipeIngredient,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

const DEFAULT_DATABASE_URL: &str = "sqlite://pricing_buddy.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable,
/// falling back to a local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    tracing::debug!("Connecting to database at {database_url}");

    Database::connect(&database_url).await.map_err(Into::into)
}

/// Creates every table used by the application if it does not exist yet.
///
/// Recipes are created before their lines so the line table's foreign key
/// has a target.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = vec![
        schema.create_table_from_entity(Ingredient),
        schema.create_table_from_entity(Packaging),
        schema.create_table_from_entity(Recipe),
        schema.create_table_from_entity(RecipeIngredient),
        schema.create_table_from_entity(FixedExpense),
        schema.create_table_from_entity(BusinessProfile),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(&*statement)).await?;
    }

    Ok(())
}
