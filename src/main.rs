//! Bootstrap binary: prepares the database and default admin account so a
//! UI layer can start serving against it.

use leadtrack::config;
use leadtrack::core::user::seed_admin;
use leadtrack::errors::Result;

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::app::load_or_default();
    info!(
        revenue_target = app_config.revenue_target,
        scope_admin_views = app_config.scope_admin_views,
        "Loaded application configuration"
    );

    // 4. Connect and create tables from the entity definitions
    let db = config::database::create_connection(&app_config).await?;
    config::database::create_tables(&db).await?;
    info!("Database initialized successfully.");

    // 5. Seed the default admin account if missing
    if seed_admin(&db).await? {
        info!("Default admin account created.");
    } else {
        info!("Admin account already present.");
    }

    Ok(())
}
