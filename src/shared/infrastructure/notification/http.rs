// reqwest implementation of the NotificationClient port.
//
// Responsibilities
// - POST the payload as JSON, once.
// - Turn non-2xx answers into NotificationError::Rejected with status and body attached.

use crate::shared::infrastructure::notification::{NotificationClient, NotificationError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as Json;

#[derive(Debug, Clone, Default)]
pub struct HttpNotificationClient {
    client: Client,
}

impl HttpNotificationClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationClient for HttpNotificationClient {
    async fn post_json(&self, url: &str, payload: &Json) -> Result<(), NotificationError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|err| NotificationError::Transport {
                url: url.to_string(),
                reason: err.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "notification accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(NotificationError::Rejected {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}
