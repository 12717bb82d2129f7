//! @acp:module "CSV Search Engine"
//! @acp:summary "BM25 search over per-domain CSV tables in a data directory"
//! @acp:domain search
//! @acp:layer service

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::bm25::Bm25;
use super::domains::{Domain, SourceSpec, Stack};
use super::rows::SearchRow;
use super::table::read_rows;
use super::{SearchProvider, SearchResponse};

/// Result count used by the search commands when none is given
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Search engine reading one CSV table per domain from `data_dir`.
///
/// Tables are read on every query; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct CsvSearchEngine {
    data_dir: PathBuf,
}

impl CsvSearchEngine {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Search a domain table, surfacing I/O and parse failures
    pub fn try_search(&self, query: &str, domain: Domain, max_results: usize) -> Result<SearchResponse> {
        let results = self.search_table(domain.source(), query, max_results)?;
        Ok(SearchResponse::for_domain(domain, query, results))
    }

    /// Search a stack guideline table, surfacing I/O and parse failures
    pub fn try_search_stack(&self, query: &str, stack: Stack, max_results: usize) -> Result<SearchResponse> {
        let results = self.search_table(stack.source(), query, max_results)?;
        Ok(SearchResponse::for_stack(stack, query, results))
    }

    fn search_table(&self, spec: &SourceSpec, query: &str, max_results: usize) -> Result<Vec<SearchRow>> {
        let rows = read_rows(&self.data_dir.join(spec.file))?;

        let documents: Vec<String> = rows
            .iter()
            .map(|row| {
                spec.search_cols
                    .iter()
                    .map(|col| row.get(col))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        let mut bm25 = Bm25::default();
        bm25.fit(&documents);

        let results = bm25
            .score(query)
            .into_iter()
            .take(max_results)
            .filter(|(_, score)| *score > 0.0)
            .map(|(idx, _)| project(&rows[idx], spec.output_cols))
            .collect::<Vec<_>>();

        tracing::debug!(
            "{}: {} of {} rows matched {:?}",
            spec.file,
            results.len(),
            rows.len(),
            query
        );
        Ok(results)
    }
}

/// Keep only the output columns present in `row`
fn project(row: &SearchRow, output_cols: &[&str]) -> SearchRow {
    output_cols
        .iter()
        .filter(|col| row.contains(col))
        .map(|col| (*col, row.get(col)))
        .collect()
}

impl SearchProvider for CsvSearchEngine {
    fn search(&self, query: &str, domain: Domain, max_results: usize) -> SearchResponse {
        self.try_search(query, domain, max_results)
            .unwrap_or_else(|e| {
                tracing::warn!("Search in {} domain failed: {}", domain, e);
                SearchResponse::for_domain(domain, query, Vec::new())
            })
    }

    fn search_stack(&self, query: &str, stack: Stack, max_results: usize) -> SearchResponse {
        self.try_search_stack(query, stack, max_results)
            .unwrap_or_else(|e| {
                tracing::warn!("Search in {} stack failed: {}", stack, e);
                SearchResponse::for_stack(stack, query, Vec::new())
            })
    }
}
