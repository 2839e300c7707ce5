//! Ingredient business logic - create, read, update and delete ingredients.
//!
//! Every function is scoped by `owner_id`; ingredients of other owners are
//! invisible. Deleting an ingredient does not touch the recipes that use it,
//! their lines simply stop resolving.

use crate::{
    core::validation,
    entities::{Ingredient, Unit, ingredient},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all ingredients of an owner, ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_ingredients(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<Vec<ingredient::Model>> {
    Ingredient::find()
        .filter(ingredient::Column::OwnerId.eq(owner_id))
        .order_by_asc(ingredient::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves one ingredient, or `None` if it does not exist for this owner.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_ingredient<C>(
    db: &C,
    owner_id: &str,
    ingredient_id: i64,
) -> Result<Option<ingredient::Model>>
where
    C: ConnectionTrait,
{
    Ingredient::find_by_id(ingredient_id)
        .filter(ingredient::Column::OwnerId.eq(owner_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Number of ingredients registered by an owner.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_ingredients(db: &DatabaseConnection, owner_id: &str) -> Result<u64> {
    Ingredient::find()
        .filter(ingredient::Column::OwnerId.eq(owner_id))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Creates a new ingredient after validating its name and cost.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The cost is negative or not finite (NaN, infinity)
/// - The database insert operation fails
pub async fn create_ingredient(
    db: &DatabaseConnection,
    owner_id: &str,
    name: &str,
    unit: Unit,
    cost_per_unit: f64,
) -> Result<ingredient::Model> {
    let name = validation::ensure_name(name)?;
    let cost_per_unit = validation::ensure_non_negative("cost_per_unit", cost_per_unit)?;
    let now = chrono::Utc::now().naive_utc();

    let ingredient = ingredient::ActiveModel {
        owner_id: Set(owner_id.to_string()),
        name: Set(name),
        unit: Set(unit),
        cost_per_unit: Set(cost_per_unit),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = ingredient.insert(db).await?;
    tracing::debug!("Created ingredient {} for {owner_id}", created.id);
    Ok(created)
}

/// Replaces an ingredient's name, unit and cost.
///
/// Recipes pick up the new cost the next time they are priced.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or the cost is negative or not finite
/// - The ingredient does not exist for this owner
/// - The database update operation fails
pub async fn update_ingredient(
    db: &DatabaseConnection,
    owner_id: &str,
    ingredient_id: i64,
    name: &str,
    unit: Unit,
    cost_per_unit: f64,
) -> Result<ingredient::Model> {
    let name = validation::ensure_name(name)?;
    let cost_per_unit = validation::ensure_non_negative("cost_per_unit", cost_per_unit)?;

    let mut ingredient: ingredient::ActiveModel = get_ingredient(db, owner_id, ingredient_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "ingredient",
            id: ingredient_id,
        })?
        .into();

    ingredient.name = Set(name);
    ingredient.unit = Set(unit);
    ingredient.cost_per_unit = Set(cost_per_unit);
    ingredient.updated_at = Set(chrono::Utc::now().naive_utc());

    ingredient.update(db).await.map_err(Into::into)
}

/// Deletes an ingredient. Recipe lines that reference it are left in place.
///
/// # Errors
/// Returns an error if the ingredient does not exist for this owner or the
/// delete fails.
pub async fn delete_ingredient(
    db: &DatabaseConnection,
    owner_id: &str,
    ingredient_id: i64,
) -> Result<()> {
    let result = Ingredient::delete_many()
        .filter(ingredient::Column::Id.eq(ingredient_id))
        .filter(ingredient::Column::OwnerId.eq(owner_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "ingredient",
            id: ingredient_id,
        });
    }
    tracing::info!("Deleted ingredient {ingredient_id} for {owner_id}");
    Ok(())
}
