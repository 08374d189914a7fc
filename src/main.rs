use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use dynamic_training::app::app;
use dynamic_training::config::AppConfig;
use dynamic_training::database::{self, users::PgUserStore};
use dynamic_training::state::AppState;
use dynamic_training::training::TrainingInfo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, SESSION_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!("Starting Dynamic Training site in {:?} mode", config.environment);

    let pool = database::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    database::migrate(&pool).await.context("failed to run migrations")?;

    let state = AppState {
        users: Arc::new(PgUserStore::new(pool)),
        training: Arc::new(TrainingInfo::dynamic_soccer()),
        config: Arc::new(config),
    };

    let bind_addr = format!("0.0.0.0:{}", state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on http://{}", bind_addr);
    axum::serve(listener, app(state)).await.context("server")?;

    Ok(())
}
