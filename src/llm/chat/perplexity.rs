use async_trait::async_trait;
use log::{ debug, warn };
use reqwest::{ Client as HttpClient, StatusCode, header::{ HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION } };
use serde::{ Deserialize, Serialize };

use super::{ ChatClient, ChatError };
use crate::llm::LlmConfig;
use crate::models::chat::ChatMessage;

/// Client for Perplexity's OpenAI-compatible `chat/completions` endpoint.
///
/// `base_url` is the full endpoint URL, not a host prefix.
pub struct PerplexityChatClient {
    http: HttpClient,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct PerplexityChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct PerplexityResponse {
    choices: Vec<PerplexityChoice>,
}

#[derive(Deserialize)]
struct PerplexityChoice {
    message: PerplexityMessage,
}

#[derive(Deserialize)]
struct PerplexityMessage {
    content: String,
}

impl PerplexityChatClient {
    pub fn new(
        api_key: Option<String>,
        model: String,
        base_url: String,
    ) -> Result<Self, ChatError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        match api_key {
            Some(key) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", key))
                    .map_err(|e| ChatError::InvalidConfig(format!("Invalid API key format: {}", e)))?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            None => {
                warn!("No API key configured; completion requests will be sent unauthenticated.");
            }
        }

        let http = HttpClient::builder().default_headers(headers).build()?;

        Ok(Self { http, model, base_url })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, ChatError> {
        Self::new(config.api_key.clone(), config.model.clone(), config.base_url.clone())
    }
}

#[async_trait]
impl ChatClient for PerplexityChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        let req = PerplexityChatRequest {
            model: &self.model,
            messages,
        };
        debug!("POST {} with {} message(s)", self.base_url, messages.len());

        let resp = self.http.post(&self.base_url).json(&req).send().await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let detail = resp.text().await.unwrap_or_default();
            return Err(ChatError::Upstream { status, detail });
        }

        let body = resp.text().await?;
        let parsed: PerplexityResponse = serde_json::from_str(&body)
            .map_err(|e| ChatError::Decode(e.to_string()))?;

        parsed.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ChatError::EmptyResponse)
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }

    fn get_base_url(&self) -> String {
        self.base_url.clone()
    }
}
