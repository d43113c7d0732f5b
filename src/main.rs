use anyhow::Context;
use car_rental_api::{
    app::{build_router, AppState},
    config::Config,
    constants::API_NAME,
    repository::SchemaRepository,
};
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting car rental API on port {}", API_NAME, config.server_port);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("{} Connected to database", API_NAME);

    SchemaRepository::new(pool.clone())
        .bootstrap()
        .await
        .context("Failed to apply database schema")?;

    let state = AppState::new(pool, &config.admin_password);
    let app = build_router(state, &config.assets_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
