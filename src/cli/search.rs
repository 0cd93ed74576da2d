//! Search command implementation

use crate::api::{ConstitutionalBackend, HttpBackend, SearchFilters, SearchRequest};
use crate::cli::output::format_search_table;
use crate::cli::SearchArgs;
use crate::config::ConsoleConfig;
use colored::Colorize;

pub async fn run_search(config: &ConsoleConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let backend = HttpBackend::new(&config.backend_url);

    let mut request = SearchRequest::new(&args.query);
    request.limit = Some(args.limit);
    if let Some(doc_type) = &args.doc_type {
        request.filters = Some(SearchFilters {
            doc_type: Some(doc_type.clone()),
            ..Default::default()
        });
    }

    let response = backend.search(request).await?;

    if response.results.is_empty() {
        println!("{}", "No documents matched.".dimmed());
        return Ok(());
    }

    println!("{}", format_search_table(&response.results));
    println!(
        "{} of {} hits for \"{}\"",
        response.results.len(),
        response.total,
        args.query
    );
    Ok(())
}
