//! Packaging business logic.
//!
//! Same lifecycle as ingredients: owner-scoped CRUD, and deleting a
//! packaging leaves the recipes that use it with a dangling reference.

use crate::{
    core::validation,
    entities::{Packaging, packaging},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all packagings of an owner, ordered by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_packagings(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<Vec<packaging::Model>> {
    Packaging::find()
        .filter(packaging::Column::OwnerId.eq(owner_id))
        .order_by_asc(packaging::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves one packaging, or `None` if it does not exist for this owner.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_packaging<C>(
    db: &C,
    owner_id: &str,
    packaging_id: i64,
) -> Result<Option<packaging::Model>>
where
    C: ConnectionTrait,
{
    Packaging::find_by_id(packaging_id)
        .filter(packaging::Column::OwnerId.eq(owner_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Number of packagings registered by an owner.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn count_packagings(db: &DatabaseConnection, owner_id: &str) -> Result<u64> {
    Packaging::find()
        .filter(packaging::Column::OwnerId.eq(owner_id))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Creates a packaging.
///
/// # Errors
/// Returns an error if the name is empty, the unit cost is negative or not
/// finite, or the insert fails.
pub async fn create_packaging(
    db: &DatabaseConnection,
    owner_id: &str,
    name: &str,
    unit_cost: f64,
) -> Result<packaging::Model> {
    let name = validation::ensure_name(name)?;
    let unit_cost = validation::ensure_non_negative("unit_cost", unit_cost)?;
    let now = chrono::Utc::now().naive_utc();

    let packaging = packaging::ActiveModel {
        owner_id: Set(owner_id.to_string()),
        name: Set(name),
        unit_cost: Set(unit_cost),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    packaging.insert(db).await.map_err(Into::into)
}

/// Replaces a packaging's name and unit cost.
///
/// # Errors
/// Returns an error if validation fails, the packaging does not exist for
/// this owner, or the update fails.
pub async fn update_packaging(
    db: &DatabaseConnection,
    owner_id: &str,
    packaging_id: i64,
    name: &str,
    unit_cost: f64,
) -> Result<packaging::Model> {
    let name = validation::ensure_name(name)?;
    let unit_cost = validation::ensure_non_negative("unit_cost", unit_cost)?;

    let mut packaging: packaging::ActiveModel = get_packaging(db, owner_id, packaging_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "packaging",
            id: packaging_id,
        })?
        .into();

    packaging.name = Set(name);
    packaging.unit_cost = Set(unit_cost);
    packaging.updated_at = Set(chrono::Utc::now().naive_utc());

    packaging.update(db).await.map_err(Into::into)
}

/// Deletes a packaging without touching the recipes that use it.
///
/// # Errors
/// Returns an error if the packaging does not exist for this owner or the
/// delete fails.
pub async fn delete_packaging(
    db: &DatabaseConnection,
    owner_id: &str,
    packaging_id: i64,
) -> Result<()> {
    let result = Packaging::delete_many()
        .filter(packaging::Column::Id.eq(packaging_id))
        .filter(packaging::Column::OwnerId.eq(owner_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "packaging",
            id: packaging_id,
        });
    }
    tracing::info!("Deleted packaging {packaging_id} for {owner_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_packaging_lifecycle() -> Result<()> {
        let db = setup_test_db().await?;

        let box_ = create_packaging(&db, "owner", "Kraft box", 2.5).await?;
        assert_eq!(box_.unit_cost, 2.5);
        assert_eq!(count_packagings(&db, "owner").await?, 1);

        let updated = update_packaging(&db, "owner", box_.id, "Kraft box L", 3.1).await?;
        assert_eq!(updated.name, "Kraft box L");
        assert_eq!(updated.unit_cost, 3.1);

        delete_packaging(&db, "owner", box_.id).await?;
        assert!(get_packaging(&db, "owner", box_.id).await?.is_none());
        assert!(list_packagings(&db, "owner").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_packaging_rejects_negative_cost() -> Result<()> {
        let db = setup_test_db().await?;
        let result = create_packaging(&db, "owner", "Bag", -0.1).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidInput {
                field: "unit_cost",
                ..
            }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_packaging_is_owner_scoped() -> Result<()> {
        let db = setup_test_db().await?;
        let bag = create_test_packaging(&db, "owner", "Bag").await?;

        assert!(get_packaging(&db, "other", bag.id).await?.is_none());
        assert!(list_packagings(&db, "other").await?.is_empty());
        assert!(matches!(
            update_packaging(&db, "other", bag.id, "Bag", 1.0).await,
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            delete_packaging(&db, "other", bag.id).await,
            Err(Error::NotFound { .. })
        ));
        Ok(())
    }
}
