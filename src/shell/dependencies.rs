// Wires concrete adapters into the use case handlers.
//
// Responsibilities
// - Pick the secret provider for this process.
// - Decide the storage backend and resolve its connection strings.
// - Build the application state over the in-memory stores.

use crate::modules::ordering::adapters::outbound::repositories_in_memory::{
    InMemoryBasketRepository, InMemoryCatalogRepository, InMemoryOrderRepository,
};
use crate::modules::ordering::core::uri_composer::CatalogUriComposer;
use crate::modules::ordering::use_cases::create_order::handler::CreateOrderHandler;
use crate::modules::ordering::use_cases::create_order::notifier::{
    NotificationSettings, OrderNotifier,
};
use crate::shared::core::secret_string::SecretString;
use crate::shared::infrastructure::notification::NotificationClient;
use crate::shared::infrastructure::secrets::env::EnvSecretProvider;
use crate::shared::infrastructure::secrets::key_vault::KeyVaultSecretProvider;
use crate::shared::infrastructure::secrets::{SecretError, SecretProvider};
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;
use std::sync::Arc;

pub const CATALOG_CONNECTION_SECRET: &str = "CatalogConnection";
pub const IDENTITY_CONNECTION_SECRET: &str = "IdentityConnection";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    InMemory,
    Database {
        catalog: SecretString,
        identity: SecretString,
    },
}

impl StorageBackend {
    pub fn describe(&self) -> &'static str {
        match self {
            StorageBackend::InMemory => "in-memory",
            StorageBackend::Database { .. } => "database",
        }
    }
}

pub async fn resolve_storage(
    config: &AppConfig,
    secrets: &dyn SecretProvider,
) -> Result<StorageBackend, SecretError> {
    if config.use_only_in_memory_database {
        return Ok(StorageBackend::InMemory);
    }

    let catalog = secrets.get_secret(CATALOG_CONNECTION_SECRET).await?;
    let identity = secrets.get_secret(IDENTITY_CONNECTION_SECRET).await?;
    Ok(StorageBackend::Database { catalog, identity })
}

pub fn secret_provider_for(config: &AppConfig) -> Arc<dyn SecretProvider> {
    match &config.key_vault {
        Some(settings) => {
            tracing::info!(vault_url = %settings.vault_url, "reading secrets from key vault");
            Arc::new(KeyVaultSecretProvider::new(settings.clone()))
        }
        None => Arc::new(EnvSecretProvider::new()),
    }
}

pub struct InMemoryStores {
    pub baskets: Arc<InMemoryBasketRepository>,
    pub catalog: Arc<InMemoryCatalogRepository>,
    pub orders: Arc<InMemoryOrderRepository>,
}

impl Default for InMemoryStores {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStores {
    pub fn new() -> Self {
        Self {
            baskets: Arc::new(InMemoryBasketRepository::new()),
            catalog: Arc::new(InMemoryCatalogRepository::new()),
            orders: Arc::new(InMemoryOrderRepository::new()),
        }
    }
}

pub fn wire_in_memory(
    stores: &InMemoryStores,
    catalog_base_url: &str,
    notification_client: Arc<dyn NotificationClient>,
    notifications: NotificationSettings,
) -> AppState {
    let create_order_handler = Arc::new(CreateOrderHandler::new(
        stores.baskets.clone(),
        stores.catalog.clone(),
        stores.orders.clone(),
        Arc::new(CatalogUriComposer::new(catalog_base_url)),
        OrderNotifier::new(notification_client, notifications),
    ));

    AppState {
        create_order_handler,
        order_queries: stores.orders.clone(),
    }
}
