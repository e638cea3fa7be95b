//! Tutorial API server.
//!
//! Run from repo root: `cargo run -p tutorial-server`
//! Configuration comes from the environment (and `.env`); see `ServerConfig`.

use tokio::net::TcpListener;
use tutorial_api::{
    build_app, ensure_database_exists, AppState, MemoryTutorialStore, PgTutorialStore, ServerConfig, StoreKind,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("tutorial_api=info,tutorial_server=info,tower_http=info")
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let state = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            let store = PgTutorialStore::new(pool, config.schema.clone());
            store.ensure_table().await?;
            AppState::new(store)
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            AppState::new(MemoryTutorialStore::new())
        }
    };

    let app = build_app(state, &config);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        cors_origin = %config.cors_allowed_origin,
        "tutorial API listening on http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutting down");
    }
}
