use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("endpoint {url} answered {status}: {body}")]
    Rejected {
        url: String,
        status: u16,
        body: String,
    },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("could not encode payload: {0}")]
    Encoding(String),
}

impl NotificationError {
    pub fn status(&self) -> Option<u16> {
        match self {
            NotificationError::Rejected { status, .. } => Some(*status),
            NotificationError::Transport { .. } | NotificationError::Encoding(_) => None,
        }
    }
}

/// Outbound port for posting a JSON document to an external endpoint.
/// A single attempt is made; anything outside 2xx is an error.
#[async_trait]
pub trait NotificationClient: Send + Sync {
    async fn post_json(&self, url: &str, payload: &Json) -> Result<(), NotificationError>;
}

pub mod http;
pub mod in_memory;
