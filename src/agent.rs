use crate::llm::chat::{ ChatClient, ChatError, new_client as new_chat_client };
use crate::llm::LlmConfig;
use crate::models::chat::Conversation;

use log::{ debug, info, warn };
use std::sync::Arc;

/// One completed question/answer round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub answer: String,
    /// The history that was passed in, followed by the question and the answer.
    pub conversation: Conversation,
}

#[derive(Clone)]
pub struct TravelAssistant {
    chat_client: Arc<dyn ChatClient>,
}

impl TravelAssistant {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, ChatError> {
        let chat_client = new_chat_client(config)?;
        info!(
            "Chat client configured: Model={}, BaseURL={}, ApiKey={}",
            chat_client.get_model(),
            chat_client.get_base_url(),
            if config.api_key.is_some() { "set" } else { "unset" }
        );
        Ok(Self::new(chat_client))
    }

    /// Sends `history` plus `question` upstream. `history` itself is never modified.
    pub async fn ask(&self, history: &Conversation, question: &str) -> Result<Exchange, ChatError> {
        let outbound = history.with_user(question);
        debug!("Asking with {} prior message(s)", history.len());

        match self.chat_client.complete(outbound.messages()).await {
            Ok(answer) => {
                debug!("Received answer ({} chars)", answer.len());
                let conversation = outbound.with_assistant(&answer);
                Ok(Exchange { answer, conversation })
            }
            Err(e) => {
                warn!("Completion request failed: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::models::chat::ChatMessage;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    /// In-process `ChatClient` that records every call and answers from a script.
    pub struct ScriptedClient {
        pub calls: Mutex<Vec<Vec<ChatMessage>>>,
        reply: Box<dyn Fn(&[ChatMessage]) -> Result<String, ChatError> + Send + Sync>,
    }

    impl ScriptedClient {
        pub fn new<F>(reply: F) -> Arc<Self>
            where F: Fn(&[ChatMessage]) -> Result<String, ChatError> + Send + Sync + 'static
        {
            Arc::new(Self { calls: Mutex::new(Vec::new()), reply: Box::new(reply) })
        }

        pub fn answering(text: &'static str) -> Arc<Self> {
            Self::new(move |_| Ok(text.to_string()))
        }

        pub fn failing(status: StatusCode) -> Arc<Self> {
            Self::new(move |_| Err(ChatError::Upstream { status, detail: "upstream body".into() }))
        }

        pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatClient for ScriptedClient {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
            self.calls.lock().unwrap().push(messages.to_vec());
            (self.reply)(messages)
        }

        fn get_model(&self) -> String {
            "scripted".into()
        }

        fn get_base_url(&self) -> String {
            "memory://scripted".into()
        }
    }
}
