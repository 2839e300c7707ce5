//! Recipe business logic - recipes, their ingredient lines and sheet loading.
//!
//! A recipe and its lines are always written together inside one database
//! transaction. Editing a recipe replaces all of its lines; there is no
//! line-level diffing. The sheet loaders join recipes with the owner's
//! current ingredients and packaging, marking anything that no longer exists
//! as [`Reference::Missing`].

use crate::{
    core::{
        ingredient::get_ingredient,
        packaging::get_packaging,
        sheet::{RecipeLine, RecipeSheet, Reference},
        validation,
    },
    entities::{
        Ingredient, Packaging, Recipe, RecipeIngredient, ingredient, packaging, recipe,
        recipe_ingredient,
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use std::collections::HashMap;

/// One ingredient quantity as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineInput {
    /// Ingredient to use
    pub ingredient_id: i64,
    /// Quantity in the ingredient's unit
    pub quantity: f64,
}

/// Everything needed to create or replace a recipe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeInput {
    /// Recipe name
    pub name: String,
    /// Opaque handle to an uploaded image
    pub image_ref: Option<String>,
    /// Optional packaging
    pub packaging_id: Option<i64>,
    /// Ingredient lines in order
    pub lines: Vec<LineInput>,
}

/// Validates names and quantities and returns the trimmed recipe name.
fn validate_input(input: &RecipeInput) -> Result<String> {
    let name = validation::ensure_name(&input.name)?;
    for line in &input.lines {
        validation::ensure_non_negative("quantity", line.quantity)?;
    }
    Ok(name)
}

/// Ensures the packaging and every ingredient exist for this owner.
async fn check_references<C>(db: &C, owner_id: &str, input: &RecipeInput) -> Result<()>
where
    C: ConnectionTrait,
{
    if let Some(packaging_id) = input.packaging_id {
        if get_packaging(db, owner_id, packaging_id).await?.is_none() {
            return Err(Error::UnresolvedReference {
                kind: "packaging",
                id: packaging_id,
            });
        }
    }

    for line in &input.lines {
        if get_ingredient(db, owner_id, line.ingredient_id).await?.is_none() {
            return Err(Error::UnresolvedReference {
                kind: "ingredient",
                id: line.ingredient_id,
            });
        }
    }
    Ok(())
}

async fn insert_lines<C>(db: &C, recipe_id: i64, lines: &[LineInput]) -> Result<()>
where
    C: ConnectionTrait,
{
    for (index, line) in lines.iter().enumerate() {
        let position = i32::try_from(index).map_err(|_| Error::invalid("lines", index))?;
        recipe_ingredient::ActiveModel {
            recipe_id: Set(recipe_id),
            ingredient_id: Set(line.ingredient_id),
            quantity: Set(line.quantity),
            position: Set(position),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

async fn delete_lines<C>(db: &C, recipe_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    RecipeIngredient::delete_many()
        .filter(recipe_ingredient::Column::RecipeId.eq(recipe_id))
        .exec(db)
        .await?;
    Ok(())
}

async fn find_owned<C>(db: &C, owner_id: &str, recipe_id: i64) -> Result<Option<recipe::Model>>
where
    C: ConnectionTrait,
{
    Recipe::find_by_id(recipe_id)
        .filter(recipe::Column::OwnerId.eq(owner_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves one recipe, or `None` if it does not exist for this owner.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_recipe(
    db: &DatabaseConnection,
    owner_id: &str,
    recipe_id: i64,
) -> Result<Option<recipe::Model>> {
    find_owned(db, owner_id, recipe_id).await
}

/// Retrieves all recipes of an owner, ordered by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_recipes(db: &DatabaseConnection, owner_id: &str) -> Result<Vec<recipe::Model>> {
    Recipe::find()
        .filter(recipe::Column::OwnerId.eq(owner_id))
        .order_by_asc(recipe::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Number of recipes registered by an owner.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_recipes(db: &DatabaseConnection, owner_id: &str) -> Result<u64> {
    Recipe::find()
        .filter(recipe::Column::OwnerId.eq(owner_id))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Lines of a recipe in their stored order.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_recipe_lines(
    db: &DatabaseConnection,
    recipe_id: i64,
) -> Result<Vec<recipe_ingredient::Model>> {
    RecipeIngredient::find()
        .filter(recipe_ingredient::Column::RecipeId.eq(recipe_id))
        .order_by_asc(recipe_ingredient::Column::Position)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a recipe with its lines.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or a quantity is negative or not finite
/// - The packaging or an ingredient does not exist for this owner
///   (`UnresolvedReference`)
/// - A database operation fails; nothing is written in that case
pub async fn create_recipe(
    db: &DatabaseConnection,
    owner_id: &str,
    input: &RecipeInput,
) -> Result<recipe::Model> {
    let name = validate_input(input)?;
    let txn = db.begin().await?;

    check_references(&txn, owner_id, input).await?;

    let now = chrono::Utc::now().naive_utc();
    let created = recipe::ActiveModel {
        owner_id: Set(owner_id.to_string()),
        name: Set(name),
        image_ref: Set(input.image_ref.clone()),
        packaging_id: Set(input.packaging_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    insert_lines(&txn, created.id, &input.lines).await?;
    txn.commit().await?;

    tracing::debug!(
        "Created recipe {} with {} line(s) for {owner_id}",
        created.id,
        input.lines.len()
    );
    Ok(created)
}

/// Replaces a recipe's fields and all of its lines.
///
/// # Errors
/// Returns an error if validation fails, the recipe does not exist for this
/// owner, a reference cannot be resolved, or a database operation fails.
pub async fn update_recipe(
    db: &DatabaseConnection,
    owner_id: &str,
    recipe_id: i64,
    input: &RecipeInput,
) -> Result<recipe::Model> {
    let name = validate_input(input)?;
    let txn = db.begin().await?;

    let mut recipe: recipe::ActiveModel = find_owned(&txn, owner_id, recipe_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "recipe",
            id: recipe_id,
        })?
        .into();

    check_references(&txn, owner_id, input).await?;

    recipe.name = Set(name);
    recipe.image_ref = Set(input.image_ref.clone());
    recipe.packaging_id = Set(input.packaging_id);
    recipe.updated_at = Set(chrono::Utc::now().naive_utc());
    let updated = recipe.update(&txn).await?;

    delete_lines(&txn, recipe_id).await?;
    insert_lines(&txn, recipe_id, &input.lines).await?;
    txn.commit().await?;

    Ok(updated)
}

/// Deletes a recipe together with its lines.
///
/// # Errors
/// Returns an error if the recipe does not exist for this owner or a
/// database operation fails.
pub async fn delete_recipe(db: &DatabaseConnection, owner_id: &str, recipe_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    if find_owned(&txn, owner_id, recipe_id).await?.is_none() {
        return Err(Error::NotFound {
            entity: "recipe",
            id: recipe_id,
        });
    }

    delete_lines(&txn, recipe_id).await?;
    Recipe::delete_by_id(recipe_id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!("Deleted recipe {recipe_id} for {owner_id}");
    Ok(())
}

fn assemble_sheet(
    recipe: recipe::Model,
    lines: Vec<recipe_ingredient::Model>,
    ingredients: &HashMap<i64, ingredient::Model>,
    packagings: &HashMap<i64, packaging::Model>,
) -> RecipeSheet {
    let lines = lines
        .into_iter()
        .map(|line| RecipeLine {
            ingredient: ingredients
                .get(&line.ingredient_id)
                .cloned()
                .map_or(Reference::Missing(line.ingredient_id), Reference::Resolved),
            quantity: line.quantity,
        })
        .collect();

    let packaging = recipe.packaging_id.map(|id| {
        packagings
            .get(&id)
            .cloned()
            .map_or(Reference::Missing(id), Reference::Resolved)
    });

    RecipeSheet {
        id: recipe.id,
        name: recipe.name,
        lines,
        packaging,
    }
}

/// Loads one recipe joined with its current ingredients and packaging.
///
/// # Errors
/// Returns `NotFound` if the recipe does not exist for this owner, or an
/// error if a query fails.
pub async fn load_recipe_sheet(
    db: &DatabaseConnection,
    owner_id: &str,
    recipe_id: i64,
) -> Result<RecipeSheet> {
    let recipe = find_owned(db, owner_id, recipe_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "recipe",
            id: recipe_id,
        })?;
    let lines = get_recipe_lines(db, recipe_id).await?;

    let ingredient_ids: Vec<i64> = lines.iter().map(|line| line.ingredient_id).collect();
    let ingredients: HashMap<i64, ingredient::Model> = Ingredient::find()
        .filter(ingredient::Column::OwnerId.eq(owner_id))
        .filter(ingredient::Column::Id.is_in(ingredient_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|ingredient| (ingredient.id, ingredient))
        .collect();

    let mut packagings = HashMap::new();
    if let Some(packaging_id) = recipe.packaging_id {
        if let Some(packaging) = get_packaging(db, owner_id, packaging_id).await? {
            packagings.insert(packaging.id, packaging);
        }
    }

    Ok(assemble_sheet(recipe, lines, &ingredients, &packagings))
}

/// Loads every recipe of an owner as sheets, ordered by recipe name.
///
/// # Errors
/// Returns an error if a query fails.
pub async fn load_recipe_sheets(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<Vec<RecipeSheet>> {
    let recipes = list_recipes(db, owner_id).await?;
    let recipe_ids: Vec<i64> = recipes.iter().map(|recipe| recipe.id).collect();

    let mut lines_by_recipe: HashMap<i64, Vec<recipe_ingredient::Model>> = HashMap::new();
    for line in RecipeIngredient::find()
        .filter(recipe_ingredient::Column::RecipeId.is_in(recipe_ids))
        .order_by_asc(recipe_ingredient::Column::RecipeId)
        .order_by_asc(recipe_ingredient::Column::Position)
        .all(db)
        .await?
    {
        lines_by_recipe.entry(line.recipe_id).or_default().push(line);
    }

    let ingredients: HashMap<i64, ingredient::Model> = Ingredient::find()
        .filter(ingredient::Column::OwnerId.eq(owner_id))
        .all(db)
        .await?
        .into_iter()
        .map(|ingredient| (ingredient.id, ingredient))
        .collect();
    let packagings: HashMap<i64, packaging::Model> = Packaging::find()
        .filter(packaging::Column::OwnerId.eq(owner_id))
        .all(db)
        .await?
        .into_iter()
        .map(|packaging| (packaging.id, packaging))
        .collect();

    Ok(recipes
        .into_iter()
        .map(|recipe| {
            let lines = lines_by_recipe.remove(&recipe.id).unwrap_or_default();
            assemble_sheet(recipe, lines, &ingredients, &packagings)
        })
        .collect())
}
