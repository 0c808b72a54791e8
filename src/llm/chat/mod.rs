pub mod perplexity;

use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use thiserror::Error;
use super::LlmConfig;
use self::perplexity::PerplexityChatClient;
use crate::models::chat::ChatMessage;

#[derive(Debug, Error)]
pub enum ChatError {
    /// The completion API answered with something other than 200.
    /// `detail` holds the raw response body and is kept out of the display string.
    #[error("API request failed with status {}", .status.as_u16())]
    Upstream {
        status: StatusCode,
        detail: String,
    },
    #[error("failed to reach completion API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not decode completion response: {0}")]
    Decode(String),
    #[error("completion API returned no choices")]
    EmptyResponse,
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ChatError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ChatError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends the full message list and returns the first choice's text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError>;

    fn get_model(&self) -> String;
    fn get_base_url(&self) -> String;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, ChatError> {
    let client = PerplexityChatClient::from_config(config)?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_display_carries_only_the_status() {
        let err = ChatError::Upstream {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: "secret upstream stack trace".into(),
        };
        let shown = err.to_string();
        assert!(shown.contains("500"));
        assert!(!shown.contains("secret"));
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn non_upstream_errors_have_no_status() {
        assert_eq!(ChatError::EmptyResponse.status(), None);
        assert_eq!(ChatError::Decode("bad".into()).status(), None);
    }

    #[test]
    fn new_client_uses_configured_endpoint() {
        let config = LlmConfig {
            api_key: Some("k".into()),
            model: "sonar".into(),
            base_url: "http://127.0.0.1:1/chat/completions".into(),
        };
        let client = new_client(&config).unwrap();
        assert_eq!(client.get_model(), "sonar");
        assert_eq!(client.get_base_url(), "http://127.0.0.1:1/chat/completions");
    }
}
