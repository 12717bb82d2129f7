//! @acp:module "Multi-Domain Search"
//! @acp:summary "Fan one query out to the recommendation domains with fixed budgets"
//! @acp:domain design
//! @acp:layer service

use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::search::{Domain, SearchProvider, SearchResponse, SearchRow};

/// Result budget per recommendation domain
pub const SEARCH_BUDGETS: [(Domain, usize); 5] = [
    (Domain::Product, 1),
    (Domain::Style, 3),
    (Domain::Color, 2),
    (Domain::Landing, 2),
    (Domain::Typography, 2),
];

/// Domains searched after the category is known
const FAN_OUT: [Domain; 4] = [
    Domain::Style,
    Domain::Color,
    Domain::Landing,
    Domain::Typography,
];

/// Priority keywords appended to the style query
const STYLE_QUERY_KEYWORDS: usize = 2;

/// Result budget for `domain`; domains outside the recommendation set get none
pub fn budget_for(domain: Domain) -> usize {
    SEARCH_BUDGETS
        .iter()
        .find(|(d, _)| *d == domain)
        .map(|(_, budget)| *budget)
        .unwrap_or(0)
}

/// Style query: the original query plus the first two non-blank priority keywords
pub fn style_query(query: &str, priority_keywords: &[String]) -> String {
    let hints: Vec<&str> = priority_keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .take(STYLE_QUERY_KEYWORDS)
        .collect();
    if hints.is_empty() {
        query.to_string()
    } else {
        format!("{} {}", query, hints.join(" "))
    }
}

/// Search responses keyed by domain
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainResults {
    responses: BTreeMap<Domain, SearchResponse>,
}

impl DomainResults {
    pub fn insert(&mut self, domain: Domain, response: SearchResponse) {
        self.responses.insert(domain, response);
    }

    pub fn response(&self, domain: Domain) -> Option<&SearchResponse> {
        self.responses.get(&domain)
    }

    /// Rows for `domain`, empty when it was not searched
    pub fn rows(&self, domain: Domain) -> &[SearchRow] {
        self.responses
            .get(&domain)
            .map(|r| r.results.as_slice())
            .unwrap_or(&[])
    }

    pub fn domains(&self) -> impl Iterator<Item = Domain> + '_ {
        self.responses.keys().copied()
    }
}

/// Issues the per-domain searches for one recommendation
pub struct SearchOrchestrator<'a> {
    provider: &'a dyn SearchProvider,
    parallel: bool,
}

impl<'a> SearchOrchestrator<'a> {
    pub fn new(provider: &'a dyn SearchProvider) -> Self {
        Self {
            provider,
            parallel: false,
        }
    }

    /// Dispatch the fan-out searches on the rayon pool
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Product-domain search used to resolve the category
    pub fn search_product(&self, query: &str) -> SearchResponse {
        self.provider
            .search(query, Domain::Product, budget_for(Domain::Product))
    }

    /// Search all five domains
    pub fn run(&self, query: &str, style_keywords: &[String]) -> DomainResults {
        let product = self.search_product(query);
        self.run_with_product(query, style_keywords, product)
    }

    /// Search the remaining domains, reusing an already issued product search
    pub fn run_with_product(
        &self,
        query: &str,
        style_keywords: &[String],
        product: SearchResponse,
    ) -> DomainResults {
        let responses: Vec<(Domain, SearchResponse)> = if self.parallel {
            FAN_OUT
                .par_iter()
                .map(|&domain| (domain, self.dispatch(query, style_keywords, domain)))
                .collect()
        } else {
            FAN_OUT
                .iter()
                .map(|&domain| (domain, self.dispatch(query, style_keywords, domain)))
                .collect()
        };

        let mut results = DomainResults::default();
        results.insert(Domain::Product, product);
        for (domain, response) in responses {
            results.insert(domain, response);
        }
        results
    }

    fn dispatch(&self, query: &str, style_keywords: &[String], domain: Domain) -> SearchResponse {
        let query = match domain {
            Domain::Style => style_query(query, style_keywords),
            _ => query.to_string(),
        };
        let response = self.provider.search(&query, domain, budget_for(domain));
        tracing::debug!("{} search {:?}: {} rows", domain, query, response.count);
        response
    }
}
