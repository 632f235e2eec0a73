//! Session Sweeper Entry Point
//!
//! Deletes expired sessions. Runs once and exits, or keeps sweeping on an
//! interval when `SWEEP_INTERVAL_SECS` is set.
//! Uses `anyhow` for startup errors; sweep failures are `auth::AuthError`.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use auth::{PgSessionRepository, SessionConfig, SessionManager};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Settings read from the environment
#[derive(Debug)]
struct SweeperConfig {
    database_url: String,
    max_connections: u32,
    interval: Option<Duration>,
}

impl SweeperConfig {
    fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let interval = match env::var("SWEEP_INTERVAL_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("SWEEP_INTERVAL_SECS is not a number: {raw}"))?;
                anyhow::ensure!(secs > 0, "SWEEP_INTERVAL_SECS must be positive");
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            max_connections,
            interval,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sweeper=info,auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SweeperConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let sessions = SessionManager::new(
        Arc::new(PgSessionRepository::new(pool.clone())),
        Arc::new(SessionConfig::default()),
    );

    let Some(period) = config.interval else {
        sessions.purge_expired().await?;
        return Ok(());
    };

    tracing::info!(interval_secs = period.as_secs(), "Sweeping on interval");

    let mut ticker = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // A failed sweep is retried on the next tick
                if let Err(e) = sessions.purge_expired().await {
                    tracing::warn!(error = %e, "Session sweep failed, retrying next tick");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
        }
    }

    pool.close().await;
    Ok(())
}
