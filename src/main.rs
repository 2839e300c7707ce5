use dotenvy::dotenv;
use pricing_buddy::{
    config::{database, settings},
    core::{dashboard, pricing, recipe, report},
    errors::{Error, Result},
};
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();

    // 3. Load settings (defaults when config.toml is absent)
    let settings = settings::load_default_config()
        .inspect_err(|e| error!("Failed to load settings: {e}"))?;

    // 4. Connect and make sure the schema exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db).await?;
    info!("Database initialized successfully.");

    // 5. Summarize the owner's business
    let owner_id = env::var("OWNER_ID").map_err(|e| Error::Config {
        message: format!("OWNER_ID is required: {e}"),
    })?;

    let summary = dashboard::load_dashboard(&db, &owner_id, settings.dashboard.chart_limit).await?;
    info!(
        "{} recipes, {} ingredients, {} packagings, {} monthly fixed expenses",
        summary.recipe_count,
        summary.ingredient_count,
        summary.packaging_count,
        report::format_currency(summary.total_fixed_expenses)
    );

    for sheet in recipe::load_recipe_sheets(&db, &owner_id).await? {
        match pricing::price_recipe(&db, &owner_id, sheet.id, &settings.pricing).await {
            Ok(result) => info!(
                "{}: cost {}, suggested price {} ({} margin)",
                sheet.name,
                report::format_currency(result.total_cost),
                report::format_currency(result.suggested_price),
                report::format_percent(result.profit_margin_percent())
            ),
            Err(e @ Error::ConfigurationIncomplete { .. }) => {
                warn!("{e}");
                break;
            }
            Err(e) => warn!("{}: {e}", sheet.name),
        }
    }

    Ok(())
}
