use anyhow::{Context, bail};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use order_placement::shared::infrastructure::notification::http::HttpNotificationClient;
use order_placement::shell::config::AppConfig;
use order_placement::shell::dependencies::{
    InMemoryStores, StorageBackend, resolve_storage, secret_provider_for, wire_in_memory,
};
use order_placement::shell::graphql::GRAPHQL_PATH;
use order_placement::shell::seed::seed_demo_data;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env().context("reading configuration")?;

    let secrets = secret_provider_for(&config);
    let storage = resolve_storage(&config, secrets.as_ref())
        .await
        .context("resolving storage backend")?;
    tracing::info!(backend = storage.describe(), "storage backend selected");

    if let StorageBackend::Database { .. } = storage {
        bail!(
            "database storage was selected but this build only ships in-memory repositories; \
             set USE_ONLY_IN_MEMORY_DATABASE=true"
        );
    }

    let stores = InMemoryStores::new();
    seed_demo_data(&stores).await;

    let state = wire_in_memory(
        &stores,
        &config.catalog_base_url,
        Arc::new(HttpNotificationClient::new()),
        config.notifications.clone(),
    );
    let app = order_placement::shell::app(state);

    let addr = config.socket_addr()?;
    tracing::info!("HTTP endpoint: http://{}/orders", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
