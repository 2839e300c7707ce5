//! Business profile business logic - one profile per owner.

use crate::{
    core::validation,
    entities::{BusinessProfile, business_profile},
    errors::Result,
};
use sea_orm::{Set, prelude::*};

/// Retrieves the owner's profile, or `None` if it was never saved.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_profile(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<Option<business_profile::Model>> {
    BusinessProfile::find()
        .filter(business_profile::Column::OwnerId.eq(owner_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates or replaces the owner's profile.
///
/// `monthly_working_hours` may be left unset, which blocks pricing until it
/// is filled in; when given it must be positive.
///
/// # Errors
/// Returns an error if the working hours are zero, negative or not finite,
/// or the write fails.
pub async fn upsert_profile(
    db: &DatabaseConnection,
    owner_id: &str,
    company_name: Option<String>,
    monthly_working_hours: Option<f64>,
) -> Result<business_profile::Model> {
    let monthly_working_hours = monthly_working_hours
        .map(|hours| validation::ensure_positive("monthly_working_hours", hours))
        .transpose()?;
    let company_name = company_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());
    let now = chrono::Utc::now().naive_utc();

    let saved = if let Some(existing) = get_profile(db, owner_id).await? {
        let mut profile: business_profile::ActiveModel = existing.into();
        profile.company_name = Set(company_name);
        profile.monthly_working_hours = Set(monthly_working_hours);
        profile.updated_at = Set(now);
        profile.update(db).await?
    } else {
        let profile = business_profile::ActiveModel {
            owner_id: Set(owner_id.to_string()),
            company_name: Set(company_name),
            monthly_working_hours: Set(monthly_working_hours),
            updated_at: Set(now),
            ..Default::default()
        };
        profile.insert(db).await?
    };

    tracing::info!("Saved business profile for {owner_id}");
    Ok(saved)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{errors::Error, test_utils::*};

    #[tokio::test]
    async fn test_upsert_profile_creates_then_updates() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(get_profile(&db, "owner").await?.is_none());

        let created = upsert_profile(&db, "owner", Some("Doce Lar".to_string()), None).await?;
        assert_eq!(created.company_name.as_deref(), Some("Doce Lar"));
        assert_eq!(created.monthly_working_hours, None);

        let updated = upsert_profile(&db, "owner", Some("Doce Lar".to_string()), Some(160.0)).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.monthly_working_hours, Some(160.0));

        assert_eq!(get_profile(&db, "owner").await?, Some(updated));
        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_profile_rejects_non_positive_hours() -> Result<()> {
        let db = setup_test_db().await?;

        for hours in [0.0, -40.0, f64::NAN] {
            let result = upsert_profile(&db, "owner", None, Some(hours)).await;
            assert!(matches!(
                result.unwrap_err(),
                Error::InvalidInput {
                    field: "monthly_working_hours",
                    ..
                }
            ));
        }
        assert!(get_profile(&db, "owner").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_company_name_is_cleared() -> Result<()> {
        let db = setup_test_db().await?;
        let profile = upsert_profile(&db, "owner", Some("   ".to_string()), Some(120.0)).await?;
        assert!(profile.company_name.is_none());
        Ok(())
    }
}
