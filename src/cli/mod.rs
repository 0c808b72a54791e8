pub mod repl;

use clap::{ Parser, Subcommand };

use crate::llm::{ DEFAULT_CHAT_BASE_URL, DEFAULT_CHAT_MODEL };

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    // --- Chat LLM Provider Args ---
    /// API key for the completion provider. Leave empty to send unauthenticated requests.
    #[arg(long, env = "PERPLEXITY_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Model name for chat completion (e.g., sonar-pro, sonar)
    #[arg(long, env = "CHAT_MODEL", default_value = DEFAULT_CHAT_MODEL)]
    pub chat_model: String,

    /// Full URL of the chat completions endpoint
    #[arg(long, env = "CHAT_BASE_URL", default_value = DEFAULT_CHAT_BASE_URL)]
    pub chat_base_url: String,

    // --- General App Args ---
    /// Enable debug logging/output
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start an interactive chat session on stdin/stdout (the default)
    Chat,
    /// Serve the POST /chat HTTP endpoint
    Serve {
        /// Host address and port for the server to listen on.
        #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:5000")]
        server_addr: String,
    },
}
