// src/bin/repair_slugs.rs
//! Backfill slugs on categories and posts stored without one.
use anyhow::Result;
use inkpost_core::application::ports::ClockPort;
use inkpost_core::config::AppConfig;
use inkpost_core::infrastructure::{database, time::SystemClock, wiring};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let services = wiring::sqlite_services(Arc::clone(&pool), clock);

    let report = services.slug_maintenance.repair_missing_slugs().await?;
    tracing::info!(
        categories = report.categories,
        posts = report.posts,
        "slug repair finished"
    );
    println!(
        "repaired {} category slug(s) and {} post slug(s)",
        report.categories, report.posts
    );

    pool.close().await;
    Ok(())
}
