pub mod agent;
pub mod models;
pub mod server;
pub mod llm;
pub mod cli;

use agent::TravelAssistant;
use cli::{ Args, Command };
use llm::LlmConfig;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let llm_config = LlmConfig::from(&args);

    info!("--- Core Configuration ---");
    info!("Chat Model: {}", llm_config.model);
    info!("Chat Base URL: {}", llm_config.base_url);
    info!("API Key: {}", if llm_config.api_key.is_some() { "set" } else { "unset" });
    match &args.command {
        Some(Command::Serve { server_addr }) => info!("Mode: HTTP server on {}", server_addr),
        Some(Command::Chat) | None => info!("Mode: interactive chat"),
    }
    info!("-------------------------");

    let assistant = Arc::new(TravelAssistant::from_config(&llm_config)?);

    match args.command {
        Some(Command::Serve { server_addr }) => {
            let server = Server::new(server_addr, assistant);
            server.run().await?;
        }
        Some(Command::Chat) | None => {
            cli::repl::run_stdio(&assistant).await?;
        }
    }

    Ok(())
}
