//! @acp:module "Search"
//! @acp:summary "Lexical search over UI/UX style guide tables"
//! @acp:domain search
//! @acp:layer feature
//!
//! The recommendation engine only talks to search through [`SearchProvider`].
//! [`CsvSearchEngine`] is the shipped implementation: one CSV table per
//! domain (and per stack), ranked with BM25.

pub mod bm25;
pub mod domains;
pub mod engine;
pub mod rows;
pub mod table;

pub use bm25::{tokenize, Bm25};
pub use domains::{detect_domain, Domain, SourceSpec, Stack};
pub use engine::{CsvSearchEngine, DEFAULT_MAX_RESULTS};
pub use rows::{ColorRow, LandingRow, ProductRow, SearchRow, StyleRow, TypographyRow};

use serde::{Deserialize, Serialize};

/// Ranked rows returned for one domain or stack query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<Stack>,
    pub query: String,
    pub file: String,
    pub count: usize,
    pub results: Vec<SearchRow>,
}

impl SearchResponse {
    pub fn for_domain(domain: Domain, query: &str, results: Vec<SearchRow>) -> Self {
        Self {
            domain: Some(domain),
            stack: None,
            query: query.to_string(),
            file: domain.source().file.to_string(),
            count: results.len(),
            results,
        }
    }

    pub fn for_stack(stack: Stack, query: &str, results: Vec<SearchRow>) -> Self {
        Self {
            domain: None,
            stack: Some(stack),
            query: query.to_string(),
            file: stack.source().file.to_string(),
            count: results.len(),
            results,
        }
    }

    /// First (highest-ranked) row, if any
    pub fn top(&self) -> Option<&SearchRow> {
        self.results.first()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// External search collaborator consumed by the recommendation engine.
///
/// Implementations never fail: a missing table or a query with no hits is an
/// empty response.
pub trait SearchProvider: Send + Sync {
    /// Search one domain table, returning at most `max_results` rows
    fn search(&self, query: &str, domain: Domain, max_results: usize) -> SearchResponse;

    /// Search one stack guideline table
    fn search_stack(&self, query: &str, stack: Stack, max_results: usize) -> SearchResponse;
}
