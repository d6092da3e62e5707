use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app_state::AppState;

mod adapters;
mod app_state;
mod config;
mod domain;
mod repositories;
mod router;
mod routes;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename(".env.local").ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "board_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let environment = config::current_environment().context("Failed to parse APP_ENVIRONMENT")?;
    let settings = config::read_config().context("Failed to read configuration")?;
    tracing::info!(%environment, "starting board-api");

    let app_state = if settings.database.in_memory {
        tracing::warn!("using in-memory storage, entries will not survive a restart");
        AppState::in_memory()
    } else {
        let connection_pool = PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_secs(5))
            .connect_with(settings.database.with_db())
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to Postgres at {}:{}",
                    settings.database.host, settings.database.port
                )
            })?;

        sqlx::migrate!("./migrations")
            .run(&connection_pool)
            .await
            .context("Failed to run database migrations")?;

        AppState::with_postgres(connection_pool)
    };

    let app = router::create(app_state, &settings.application);

    let addr = format!("{}:{}", settings.application.host, settings.application.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
