use crate::shared::core::secret_string::SecretString;
use crate::shared::infrastructure::secrets::{SecretError, SecretProvider};
use async_trait::async_trait;
use std::collections::HashMap;

/// Resolves secrets from process environment variables.
///
/// Secret names are PascalCase (`CatalogConnection`) and map to
/// SCREAMING_SNAKE_CASE variables (`CATALOG_CONNECTION`).
pub struct EnvSecretProvider {
    lookup: Box<dyn Fn(&str) -> Option<String> + Send + Sync>,
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self {
            lookup: Box::new(|key| std::env::var(key).ok()),
        }
    }

    pub fn from_map(vars: HashMap<String, String>) -> Self {
        Self {
            lookup: Box::new(move |key| vars.get(key).cloned()),
        }
    }
}

pub fn env_key_for(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 4);
    let mut previous_lower = false;
    for ch in name.chars() {
        if ch == '-' || ch == ':' || ch == '.' {
            key.push('_');
            previous_lower = false;
            continue;
        }
        if ch.is_ascii_uppercase() && previous_lower {
            key.push('_');
        }
        previous_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        key.push(ch.to_ascii_uppercase());
    }
    key
}

#[async_trait]
impl SecretProvider for EnvSecretProvider {
    async fn get_secret(&self, name: &str) -> Result<SecretString, SecretError> {
        let key = env_key_for(name);
        match (self.lookup)(&key) {
            Some(value) if !value.trim().is_empty() => Ok(SecretString::new(value)),
            _ => Err(SecretError::NotFound(name.to_string())),
        }
    }
}
