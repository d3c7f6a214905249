// In memory implementation of the NotificationClient port.
//
// Purpose
// - Let handler tests assert which payloads went out, and to which URL, without a network.
//
// Responsibilities
// - Record every call.
// - Answer with a configurable status so failure paths can be exercised.

use crate::shared::infrastructure::notification::{NotificationClient, NotificationError};
use serde_json::Value as Json;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct SentNotification {
    pub url: String,
    pub payload: Json,
}

pub struct RecordingNotificationClient {
    pub sent: Mutex<Vec<SentNotification>>,
    status: u16,
}

impl Default for RecordingNotificationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingNotificationClient {
    pub fn new() -> Self {
        Self::answering(200)
    }

    pub fn answering(status: u16) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            status,
        }
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait::async_trait]
impl NotificationClient for RecordingNotificationClient {
    async fn post_json(&self, url: &str, payload: &Json) -> Result<(), NotificationError> {
        self.sent.lock().await.push(SentNotification {
            url: url.to_string(),
            payload: payload.clone(),
        });
        if (200..300).contains(&self.status) {
            Ok(())
        } else {
            Err(NotificationError::Rejected {
                url: url.to_string(),
                status: self.status,
                body: "rejected by recording client".to_string(),
            })
        }
    }
}
