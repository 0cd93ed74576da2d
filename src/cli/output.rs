//! Output formatting helpers for CLI commands

use crate::api::{SearchResult, ServiceStatus};
use crate::chat::{DisplaySource, RagDisplayStats};
use crate::metrics::{MetricsSnapshot, Signal};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::fmt::Write;

/// Format a megabyte figure as a human-readable size.
pub fn format_storage_mb(mb: f64) -> String {
    if mb < 1024.0 {
        format!("{:.1}MB", mb)
    } else {
        format!("{:.2}GB", mb / 1024.0)
    }
}

/// Format a document count with K/M suffixes.
pub fn format_doc_count(count: u64) -> String {
    if count < 1_000 {
        count.to_string()
    } else if count < 1_000_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        format!("{:.2}M", count as f64 / 1_000_000.0)
    }
}

fn status_cell(status: ServiceStatus) -> String {
    match status {
        ServiceStatus::Healthy => "Healthy".green().to_string(),
        ServiceStatus::Degraded => "Degraded".yellow().to_string(),
        ServiceStatus::Unhealthy => "Unhealthy".red().to_string(),
    }
}

/// Format cited sources as a table.
pub fn format_sources_table(sources: &[DisplaySource]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Source", "Type", "Relevance"]);

    for s in sources {
        table.add_row(vec![
            Cell::new(&s.title),
            Cell::new(s.kind),
            Cell::new(format!("{:.2}", s.relevance)),
        ]);
    }

    table.to_string()
}

/// Format the stat line shown under an answer.
pub fn format_rag_stats(stats: &RagDisplayStats) -> String {
    format!(
        "latency {} | confidence {:.0}% | pipeline search {} / gen {} / verify {}",
        stats.latency,
        stats.confidence * 100.0,
        stats.pipeline.search,
        stats.pipeline.gen,
        stats.pipeline.verify
    )
}

/// Format search hits as a table.
pub fn format_search_table(results: &[SearchResult]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Title", "Type", "Score", "Snippet"]);

    for r in results {
        let snippet: String = r.snippet.chars().take(80).collect();
        table.add_row(vec![
            Cell::new(&r.title),
            Cell::new(r.doc_type.as_deref().unwrap_or("-")),
            Cell::new(format!("{:.2}", r.score)),
            Cell::new(snippet),
        ]);
    }

    table.to_string()
}

fn signal_suffix<T>(signal: &Signal<T>) -> &'static str {
    match signal {
        Signal::Fresh(_) | Signal::Absent => "",
        Signal::Stale(_) => " (stale)",
        Signal::Unavailable(_) => "",
    }
}

/// Format one metrics snapshot as pretty text.
pub fn format_snapshot_pretty(snapshot: &MetricsSnapshot) -> String {
    let mut output = String::new();

    if snapshot.loading {
        writeln!(output, "{}", "Waiting for first metrics cycle...".dimmed()).unwrap();
        return output;
    }

    match snapshot.health.value() {
        Some(health) => {
            writeln!(
                output,
                "Backend: {}{} (ollama {})",
                status_cell(health.status),
                signal_suffix(&snapshot.health),
                if health.ollama.connected {
                    "connected".green()
                } else {
                    "disconnected".red()
                }
            )
            .unwrap();
        }
        None => writeln!(output, "Backend: {}", "unreachable".red()).unwrap(),
    }

    match snapshot.stats.value() {
        Some(stats) => {
            writeln!(
                output,
                "Corpus:  {} documents in {} collections, {}{}",
                format_doc_count(stats.total_documents),
                stats.collections.len(),
                format_storage_mb(stats.storage_size_mb),
                signal_suffix(&snapshot.stats)
            )
            .unwrap();
        }
        None => writeln!(output, "Corpus:  {}", "no data".dimmed()).unwrap(),
    }

    match (&snapshot.gpu, snapshot.gpu.value()) {
        (Signal::Absent, _) => writeln!(output, "GPU:     none reported").unwrap(),
        (_, Some(gpu)) => {
            writeln!(
                output,
                "GPU:     {} {}/{}MB, {:.0}% util, {:.0}°C{}",
                gpu.name,
                gpu.memory_used,
                gpu.memory_total,
                gpu.utilization,
                gpu.temperature,
                signal_suffix(&snapshot.gpu)
            )
            .unwrap();
        }
        (_, None) => writeln!(output, "GPU:     {}", "no data".dimmed()).unwrap(),
    }

    if let Some(error) = &snapshot.error {
        writeln!(output, "Errors:  {}", error.red()).unwrap();
    }
    if let Some(at) = snapshot.last_updated {
        writeln!(output, "Updated: {}", at.format("%H:%M:%S")).unwrap();
    }

    output
}
