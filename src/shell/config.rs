// Process configuration read from the environment.
//
// Boundaries
// - Parsing goes through a lookup function so tests never mutate the real environment.
// - Blank values count as unset.

use crate::modules::ordering::use_cases::create_order::notifier::NotificationSettings;
use crate::shared::core::secret_string::SecretString;
use crate::shared::infrastructure::secrets::key_vault::{DEFAULT_AUTHORITY_HOST, KeyVaultSettings};
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0} is required when KEY_VAULT_URL is set")]
    MissingKeyVaultSetting(&'static str),

    #[error("{0} is required")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_base_url: String,
    pub notifications: NotificationSettings,
    pub use_only_in_memory_database: bool,
    pub key_vault: Option<KeyVaultSettings>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|err: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: "PORT",
                    value: raw.clone(),
                    reason: err.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        let catalog_base_url =
            get("CATALOG_BASE_URL").ok_or(ConfigError::Missing("CATALOG_BASE_URL"))?;
        if !(catalog_base_url.starts_with("http://") || catalog_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "CATALOG_BASE_URL",
                value: catalog_base_url,
                reason: "expected an absolute http(s) url".to_string(),
            });
        }

        let use_only_in_memory_database = match get("USE_ONLY_IN_MEMORY_DATABASE") {
            Some(raw) => parse_flag("USE_ONLY_IN_MEMORY_DATABASE", &raw)?,
            None => false,
        };

        let key_vault = match get("KEY_VAULT_URL") {
            Some(vault_url) => {
                let required = |key: &'static str| {
                    get(key).ok_or(ConfigError::MissingKeyVaultSetting(key))
                };
                Some(KeyVaultSettings {
                    vault_url,
                    tenant_id: required("KEY_VAULT_TENANT_ID")?,
                    client_id: required("KEY_VAULT_CLIENT_ID")?,
                    client_secret: SecretString::new(required("KEY_VAULT_CLIENT_SECRET")?),
                    authority_host: get("KEY_VAULT_AUTHORITY_HOST")
                        .unwrap_or_else(|| DEFAULT_AUTHORITY_HOST.to_string()),
                })
            }
            None => None,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            catalog_base_url,
            notifications: NotificationSettings {
                order_archive_url: get("ORDER_RESERVER_FUNCTION_URL"),
                warehouse_reservation_url: get("ORDER_ITEMS_RESERVER_FUNCTION_URL"),
            },
            use_only_in_memory_database,
            key_vault,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|err: std::net::AddrParseError| ConfigError::InvalidValue {
            key: "HOST",
            value: self.host.clone(),
            reason: err.to_string(),
        })
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
