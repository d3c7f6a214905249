// Azure Key Vault implementation of the SecretProvider port.
//
// Responsibilities
// - Obtain a bearer token with the OAuth2 client credentials grant.
// - Read the current version of a secret over the Key Vault REST API.
//
// Boundaries
// - One token request per lookup. Secrets are only read at bootstrap.

use crate::shared::core::secret_string::SecretString;
use crate::shared::infrastructure::secrets::{SecretError, SecretProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";
const VAULT_SCOPE: &str = "https://vault.azure.net/.default";
const API_VERSION: &str = "7.4";

#[derive(Debug, Clone)]
pub struct KeyVaultSettings {
    pub vault_url: String,
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: SecretString,
    pub authority_host: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct SecretBundle {
    value: String,
}

pub struct KeyVaultSecretProvider {
    settings: KeyVaultSettings,
    client: Client,
}

impl KeyVaultSecretProvider {
    pub fn new(settings: KeyVaultSettings) -> Self {
        Self {
            settings,
            client: Client::new(),
        }
    }

    async fn access_token(&self) -> Result<SecretString, SecretError> {
        let url = format!(
            "{}/{}/oauth2/v2.0/token",
            self.settings.authority_host.trim_end_matches('/'),
            self.settings.tenant_id
        );
        let response = self
            .client
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.settings.client_id.as_str()),
                ("client_secret", self.settings.client_secret.expose_secret()),
                ("scope", VAULT_SCOPE),
            ])
            .send()
            .await
            .map_err(|err| SecretError::Backend(err.to_string()))?;

        if !response.status().is_success() {
            return Err(SecretError::Backend(format!(
                "token endpoint answered HTTP {}",
                response.status().as_u16()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| SecretError::Backend(err.to_string()))?;
        Ok(SecretString::new(token.access_token))
    }
}

#[async_trait]
impl SecretProvider for KeyVaultSecretProvider {
    async fn get_secret(&self, name: &str) -> Result<SecretString, SecretError> {
        let token = self.access_token().await?;
        let url = format!(
            "{}/secrets/{}?api-version={}",
            self.settings.vault_url.trim_end_matches('/'),
            name,
            API_VERSION
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|err| SecretError::Backend(err.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(SecretError::NotFound(name.to_string())),
            status if !status.is_success() => Err(SecretError::Rejected {
                name: name.to_string(),
                status: status.as_u16(),
            }),
            _ => {
                let bundle: SecretBundle = response
                    .json()
                    .await
                    .map_err(|err| SecretError::Backend(err.to_string()))?;
                tracing::debug!(secret = name, "resolved secret from key vault");
                Ok(SecretString::new(bundle.value))
            }
        }
    }
}

#[cfg(test)]
mod key_vault_secret_provider_tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Path,
        http::{HeaderMap, StatusCode as AxumStatus},
        response::IntoResponse,
        routing::{get, post},
    };
    use rstest::rstest;

    async fn spawn_fake_vault() -> String {
        let app = Router::new()
            .route(
                "/tenant-1/oauth2/v2.0/token",
                post(|body: String| async move {
                    if body.contains("grant_type=client_credentials")
                        && body.contains("client_secret=s3cret")
                    {
                        Json(serde_json::json!({ "access_token": "tok-1" })).into_response()
                    } else {
                        AxumStatus::UNAUTHORIZED.into_response()
                    }
                }),
            )
            .route(
                "/secrets/{name}",
                get(|Path(name): Path<String>, headers: HeaderMap| async move {
                    let authorized = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        == Some("Bearer tok-1");
                    if !authorized {
                        return AxumStatus::FORBIDDEN.into_response();
                    }
                    match name.as_str() {
                        "CatalogConnection" => {
                            Json(serde_json::json!({ "value": "Server=vault-catalog" }))
                                .into_response()
                        }
                        _ => AxumStatus::NOT_FOUND.into_response(),
                    }
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn settings(base: &str, client_secret: &str) -> KeyVaultSettings {
        KeyVaultSettings {
            vault_url: base.to_string(),
            tenant_id: "tenant-1".to_string(),
            client_id: "client-1".to_string(),
            client_secret: SecretString::from(client_secret),
            authority_host: base.to_string(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_read_a_secret_with_a_client_credentials_token() {
        let base = spawn_fake_vault().await;
        let provider = KeyVaultSecretProvider::new(settings(&base, "s3cret"));
        let secret = provider.get_secret("CatalogConnection").await.unwrap();
        assert_eq!(secret.expose_secret(), "Server=vault-catalog");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_missing_secret_as_not_found() {
        let base = spawn_fake_vault().await;
        let provider = KeyVaultSecretProvider::new(settings(&base, "s3cret"));
        assert!(matches!(
            provider.get_secret("IdentityConnection").await,
            Err(SecretError::NotFound(name)) if name == "IdentityConnection"
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_the_token_request_is_refused() {
        let base = spawn_fake_vault().await;
        let provider = KeyVaultSecretProvider::new(settings(&base, "wrong"));
        let err = provider.get_secret("CatalogConnection").await.unwrap_err();
        assert!(err.to_string().contains("HTTP 401"));
    }
}
