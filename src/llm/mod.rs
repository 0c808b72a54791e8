pub mod chat;

use crate::cli::Args;

pub const DEFAULT_CHAT_BASE_URL: &str = "https://api.perplexity.ai/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "sonar-pro";

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl From<&Args> for LlmConfig {
    fn from(args: &Args) -> Self {
        Self {
            api_key: Some(args.api_key.trim().to_string()).filter(|k| !k.is_empty()),
            model: args.chat_model.clone(),
            base_url: args.chat_base_url.clone(),
        }
    }
}
