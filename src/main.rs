mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Context;

use config::Config;
use state::AppState;
use store::ItemStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-items-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = ItemStore::open(&config.store_path).await?;

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Mobile clients on the local network reach this host by its LAN address");

    axum::serve(listener, app::build_router(state))
        .await
        .context("Server error")?;

    Ok(())
}
