use crate::agent::TravelAssistant;
use crate::models::chat::Conversation;

use log::{ debug, info };
use std::io;
use tokio::io::{ AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader };

pub const WELCOME: &str =
    "Welcome to TRACE Travel Assistant Bot! Ask me anything about your travel safety and plans.\nType 'exit' to quit.";
pub const FAREWELL: &str = "Thank you for using TRACE Travel Assistant. Safe travels!";
const PROMPT: &str = "You: ";

pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

/// Runs the chat loop until an exit command or end of input and returns the
/// accumulated history.
///
/// A failed request is shown as a bot line and leaves the history as it was.
pub async fn run_repl<R, W>(
    assistant: &TravelAssistant,
    input: R,
    mut output: W
) -> io::Result<Conversation>
    where R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin
{
    output.write_all(format!("{}\n", WELCOME).as_bytes()).await?;

    let mut lines = input.lines();
    let mut history = Conversation::new();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            debug!("Input closed, leaving chat loop");
            break;
        };

        if is_exit_command(&line) {
            output.write_all(format!("{}\n", FAREWELL).as_bytes()).await?;
            break;
        }

        let reply = match assistant.ask(&history, &line).await {
            Ok(exchange) => {
                history = exchange.conversation;
                exchange.answer
            }
            Err(e) => format!("Error: {}", e),
        };
        output.write_all(format!("Bot: {}\n\n", reply).as_bytes()).await?;
    }

    output.flush().await?;
    info!("Chat session ended after {} message(s)", history.len());
    Ok(history)
}

pub async fn run_stdio(assistant: &TravelAssistant) -> io::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    run_repl(assistant, stdin, tokio::io::stdout()).await?;
    Ok(())
}
