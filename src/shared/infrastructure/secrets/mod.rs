// Ports for resolving connection strings and other secrets at bootstrap.
//
// Boundaries
// - Only the shell consumes these. Use cases never see a secret.

use crate::shared::core::secret_string::SecretString;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret {0} not found")]
    NotFound(String),

    #[error("secret store rejected the request for {name}: HTTP {status}")]
    Rejected { name: String, status: u16 },

    #[error("secret store error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SecretProvider: Send + Sync {
    async fn get_secret(&self, name: &str) -> Result<SecretString, SecretError>;
}

pub mod env;
pub mod in_memory;
pub mod key_vault;
