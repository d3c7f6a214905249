use crate::shared::core::secret_string::SecretString;
use crate::shared::infrastructure::secrets::{SecretError, SecretProvider};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySecretProvider {
    secrets: RwLock<HashMap<String, SecretString>>,
}

impl InMemorySecretProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, name: impl Into<String>, value: impl Into<SecretString>) {
        self.secrets.write().await.insert(name.into(), value.into());
    }
}

#[async_trait::async_trait]
impl SecretProvider for InMemorySecretProvider {
    async fn get_secret(&self, name: &str) -> Result<SecretString, SecretError> {
        self.secrets
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| SecretError::NotFound(name.to_string()))
    }
}
