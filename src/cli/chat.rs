//! Chat command implementation
//!
//! Direct CHAT-mode fallback: one plain model reply from the Ollama daemon,
//! bypassing retrieval and verification entirely.

use crate::api::ollama::{OllamaChatRequest, OllamaMessage, OllamaRole};
use crate::api::OllamaClient;
use crate::cli::ChatArgs;
use crate::config::ConsoleConfig;
use anyhow::bail;
use colored::Colorize;

const SYSTEM_PROMPT: &str =
    "You are a constitutional law assistant. Answer concisely and in the user's language.";

pub async fn run_chat(config: &ConsoleConfig, args: &ChatArgs) -> anyhow::Result<()> {
    let url = args.ollama_url.as_deref().unwrap_or(&config.ollama_url);
    let client = OllamaClient::new(url);

    if !client.is_available().await {
        bail!("no Ollama models available at {}", url);
    }

    let request = OllamaChatRequest {
        model: args.model.clone(),
        messages: vec![
            OllamaMessage {
                role: OllamaRole::System,
                content: SYSTEM_PROMPT.to_string(),
            },
            OllamaMessage {
                role: OllamaRole::User,
                content: args.message.clone(),
            },
        ],
        stream: false,
        options: None,
    };

    let response = client.chat(request).await?;
    println!("{}", response.message.content);
    if let Some(total_duration) = response.total_duration {
        // Ollama reports nanoseconds.
        println!(
            "{}",
            format!("{} in {}ms", response.model, total_duration / 1_000_000).dimmed()
        );
    }
    Ok(())
}
