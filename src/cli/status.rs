//! Health and models command implementations

use crate::api::{ConstitutionalBackend, HttpBackend, OllamaClient, ServiceStatus};
use crate::cli::{HealthArgs, ModelsArgs};
use crate::config::ConsoleConfig;
use colored::Colorize;

pub async fn run_health(config: &ConsoleConfig, args: &HealthArgs) -> anyhow::Result<()> {
    let backend = HttpBackend::new(&config.backend_url);
    let report = backend.health().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let status = match report.status {
        ServiceStatus::Healthy => "Healthy".green(),
        ServiceStatus::Degraded => "Degraded".yellow(),
        ServiceStatus::Unhealthy => "Unhealthy".red(),
    };
    println!("Status:  {}", status);
    if !report.version.is_empty() {
        println!("Version: {}", report.version);
    }
    println!(
        "Ollama:  {} ({} models available, {} loaded)",
        if report.ollama.connected {
            "connected".green()
        } else {
            "disconnected".red()
        },
        report.ollama.models_available.len(),
        report.ollama.models_loaded.len()
    );
    println!("GPU:     {}", if report.gpu_available { "yes" } else { "no" });

    if !report.checks.is_empty() {
        println!();
        println!("Checks:");
        let mut checks: Vec<_> = report.checks.iter().collect();
        checks.sort_by(|a, b| a.0.cmp(b.0));
        for (name, ok) in checks {
            let icon = if *ok { "✓".green() } else { "✗".red() };
            println!("  {} {}", icon, name);
        }
    }

    Ok(())
}

pub async fn run_models(config: &ConsoleConfig, args: &ModelsArgs) -> anyhow::Result<()> {
    let url = args.ollama_url.as_deref().unwrap_or(&config.ollama_url);
    let client = OllamaClient::new(url);
    let models = client.list_models().await?;

    if models.is_empty() {
        println!("{}", "No models installed.".dimmed());
        return Ok(());
    }

    for model in models {
        println!("{}", model);
    }
    Ok(())
}
