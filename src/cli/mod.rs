//! CLI module for the Grundlag console.
//!
//! # Commands
//!
//! - `ask` - Send one question through the RAG pipeline
//! - `chat` - Plain model chat via Ollama, no retrieval
//! - `watch` - Poll and display backend telemetry
//! - `search` - Search the document index
//! - `health` - Show backend health
//! - `models` - List Ollama models (direct fallback path)
//!
//! # Example
//!
//! ```bash
//! # One question, sources included
//! grundlag ask "Vad säger regeringsformen om tryckfrihet?"
//!
//! # Live telemetry, five cycles
//! grundlag watch --count 5
//! ```

pub mod ask;
pub mod chat;
pub mod output;
pub mod search;
pub mod status;
pub mod watch;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Grundlag - Constitutional AI console
#[derive(Parser, Debug)]
#[command(
    name = "grundlag",
    version,
    about = "Headless console for the Constitutional AI retrieval backend"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override backend base URL
    #[arg(long, global = true, env = "GRUNDLAG_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "GRUNDLAG_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one question through the RAG pipeline
    Ask(AskArgs),
    /// Plain model chat via Ollama, bypassing retrieval
    Chat(ChatArgs),
    /// Poll and display backend telemetry
    Watch(WatchArgs),
    /// Search the document index
    Search(SearchArgs),
    /// Show backend health
    Health(HealthArgs),
    /// List Ollama models (direct fallback path)
    Models(ModelsArgs),
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to ask
    pub question: String,

    /// Response mode hint (auto, chat, assist, evidence)
    #[arg(short, long, default_value = "auto")]
    pub mode: String,

    /// Emit the full transcript entry as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// The message to send
    pub message: String,

    /// Model to chat with
    #[arg(short, long, default_value = "mistral:7b")]
    pub model: String,

    /// Override Ollama base URL
    #[arg(long, env = "GRUNDLAG_OLLAMA_URL")]
    pub ollama_url: Option<String>,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Poll interval in milliseconds
    #[arg(short, long)]
    pub interval_ms: Option<u64>,

    /// Stop after this many cycles (default: run until Ctrl-C)
    #[arg(short = 'n', long)]
    pub count: Option<u64>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Maximum number of hits
    #[arg(short, long, default_value = "10")]
    pub limit: u32,

    /// Filter by doc_type (e.g. lag, prop, sou)
    #[arg(long)]
    pub doc_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Override Ollama base URL
    #[arg(long, env = "GRUNDLAG_OLLAMA_URL")]
    pub ollama_url: Option<String>,
}
