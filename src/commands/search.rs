//! @acp:module "Search Command"
//! @acp:summary "Query one domain or stack table and print ranked rows"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::search::{detect_domain, CsvSearchEngine, Domain, SearchResponse, Stack};

/// Longest cell value printed before truncation
const MAX_VALUE_CHARS: usize = 300;

/// Options for the search command
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub query: String,
    /// Domain to search; detected from the query when absent
    pub domain: Option<Domain>,
    pub max_results: usize,
    pub json: bool,
}

/// Options for the stack command
#[derive(Debug, Clone)]
pub struct StackOptions {
    pub query: String,
    pub stack: Stack,
    pub max_results: usize,
    pub json: bool,
}

/// Execute the search command
pub fn execute_search(options: SearchOptions, config: &Config) -> Result<()> {
    let domain = options.domain.unwrap_or_else(|| {
        let detected = detect_domain(&options.query);
        tracing::debug!("Detected domain {} for {:?}", detected, options.query);
        detected
    });

    let engine = CsvSearchEngine::new(config.resolved_data_dir());
    let response = engine.try_search(&options.query, domain, options.max_results)?;
    print_response(&response, options.json)
}

/// Execute the stack command
pub fn execute_stack(options: StackOptions, config: &Config) -> Result<()> {
    let engine = CsvSearchEngine::new(config.resolved_data_dir());
    let response = engine.try_search_stack(&options.query, options.stack, options.max_results)?;
    print_response(&response, options.json)
}

fn print_response(response: &SearchResponse, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else if response.is_empty() {
        println!(
            "{} No results for {:?} in {}",
            style("!").yellow(),
            response.query,
            response.file
        );
    } else {
        println!("{}", format_output(response));
    }
    Ok(())
}

/// Markdown rendering of a search response
pub fn format_output(response: &SearchResponse) -> String {
    let mut lines = Vec::new();

    match (response.stack, response.domain) {
        (Some(stack), _) => {
            lines.push("## UI Pro Max Stack Guidelines".to_string());
            lines.push(format!("**Stack:** {} | **Query:** {}", stack, response.query));
        }
        (None, domain) => {
            lines.push("## UI Pro Max Search Results".to_string());
            let domain = domain.map(|d| d.to_string()).unwrap_or_default();
            lines.push(format!("**Domain:** {} | **Query:** {}", domain, response.query));
        }
    }
    lines.push(format!(
        "**Source:** {} | **Found:** {} results\n",
        response.file, response.count
    ));

    for (i, row) in response.results.iter().enumerate() {
        lines.push(format!("### Result {}", i + 1));
        for (key, value) in row.columns() {
            lines.push(format!("- **{}:** {}", key, truncate(value)));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn truncate(value: &str) -> String {
    if value.chars().count() > MAX_VALUE_CHARS {
        let head: String = value.chars().take(MAX_VALUE_CHARS).collect();
        format!("{}...", head)
    } else {
        value.to_string()
    }
}
