//! Fixed expense business logic.
//!
//! Fixed expenses are consumed as a whole set by the allocator and the
//! dashboard; they are never linked to individual recipes.

use crate::{
    core::validation,
    entities::{FixedExpense, fixed_expense},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all fixed expenses of an owner in creation order.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_fixed_expenses(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<Vec<fixed_expense::Model>> {
    FixedExpense::find()
        .filter(fixed_expense::Column::OwnerId.eq(owner_id))
        .order_by_asc(fixed_expense::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves one fixed expense, or `None` if it does not exist for this owner.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_fixed_expense(
    db: &DatabaseConnection,
    owner_id: &str,
    expense_id: i64,
) -> Result<Option<fixed_expense::Model>> {
    FixedExpense::find_by_id(expense_id)
        .filter(fixed_expense::Column::OwnerId.eq(owner_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a fixed expense.
///
/// # Errors
/// Returns an error if the name is empty, the monthly value is negative or
/// not finite, or the insert fails.
pub async fn create_fixed_expense(
    db: &DatabaseConnection,
    owner_id: &str,
    name: &str,
    monthly_value: f64,
) -> Result<fixed_expense::Model> {
    let name = validation::ensure_name(name)?;
    let monthly_value = validation::ensure_non_negative("monthly_value", monthly_value)?;
    let now = chrono::Utc::now().naive_utc();

    let expense = fixed_expense::ActiveModel {
        owner_id: Set(owner_id.to_string()),
        name: Set(name),
        monthly_value: Set(monthly_value),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    expense.insert(db).await.map_err(Into::into)
}

/// Replaces a fixed expense's name and monthly value.
///
/// # Errors
/// Returns an error if validation fails, the expense does not exist for this
/// owner, or the update fails.
pub async fn update_fixed_expense(
    db: &DatabaseConnection,
    owner_id: &str,
    expense_id: i64,
    name: &str,
    monthly_value: f64,
) -> Result<fixed_expense::Model> {
    let name = validation::ensure_name(name)?;
    let monthly_value = validation::ensure_non_negative("monthly_value", monthly_value)?;

    let mut expense: fixed_expense::ActiveModel = get_fixed_expense(db, owner_id, expense_id)
        .await?
        .ok_or(Error::NotFound {
            entity: "fixed expense",
            id: expense_id,
        })?
        .into();

    expense.name = Set(name);
    expense.monthly_value = Set(monthly_value);
    expense.updated_at = Set(chrono::Utc::now().naive_utc());

    expense.update(db).await.map_err(Into::into)
}

/// Deletes a fixed expense.
///
/// # Errors
/// Returns an error if the expense does not exist for this owner or the
/// delete fails.
pub async fn delete_fixed_expense(
    db: &DatabaseConnection,
    owner_id: &str,
    expense_id: i64,
) -> Result<()> {
    let result = FixedExpense::delete_many()
        .filter(fixed_expense::Column::Id.eq(expense_id))
        .filter(fixed_expense::Column::OwnerId.eq(owner_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: "fixed expense",
            id: expense_id,
        });
    }
    Ok(())
}
