//! Ask command implementation

use crate::api::{ConstitutionalBackend, HttpBackend, QueryMode};
use crate::chat::{ChatEngine, Role, SubmitOutcome};
use crate::cli::output::{format_rag_stats, format_sources_table};
use crate::cli::AskArgs;
use crate::config::ConsoleConfig;
use anyhow::{bail, Context};
use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;

fn parse_mode(s: &str) -> anyhow::Result<QueryMode> {
    match s.to_lowercase().as_str() {
        "auto" => Ok(QueryMode::Auto),
        "chat" => Ok(QueryMode::Chat),
        "assist" => Ok(QueryMode::Assist),
        "evidence" => Ok(QueryMode::Evidence),
        other => bail!("invalid mode '{}': expected auto, chat, assist or evidence", other),
    }
}

pub async fn run_ask(config: &ConsoleConfig, args: &AskArgs) -> anyhow::Result<()> {
    let mode = parse_mode(&args.mode)?;

    let backend: Arc<dyn ConstitutionalBackend> = Arc::new(
        HttpBackend::new(&config.backend_url)
            .query_timeout(Duration::from_secs(config.query_timeout_seconds)),
    );

    let mut engine = ChatEngine::new(backend).with_mode(mode);
    engine.set_input(&args.question);

    let outcome = engine.submit().await;

    let answer = engine
        .messages()
        .iter()
        .rev()
        .find(|m| m.role == Role::Assistant)
        .context("transcript has no assistant entry after submit")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(answer)?);
        return Ok(());
    }

    match outcome {
        SubmitOutcome::Answered => {
            println!("{}", answer.content);
            if let Some(stats) = &answer.rag {
                println!();
                println!("{}", format_rag_stats(stats).dimmed());
                if !stats.sources.is_empty() {
                    println!("{}", format_sources_table(&stats.sources));
                }
            }
            Ok(())
        }
        SubmitOutcome::Failed => {
            eprintln!("{}", answer.content.red());
            bail!(
                "query failed: {}",
                engine.last_error().unwrap_or("unknown error")
            )
        }
        SubmitOutcome::Ignored => bail!("question is empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_accepts_known_values() {
        assert_eq!(parse_mode("auto").unwrap(), QueryMode::Auto);
        assert_eq!(parse_mode("EVIDENCE").unwrap(), QueryMode::Evidence);
    }

    #[test]
    fn test_parse_mode_rejects_unknown() {
        assert!(parse_mode("oracle").is_err());
    }
}
