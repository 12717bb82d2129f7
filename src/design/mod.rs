//! @acp:module "Design System"
//! @acp:summary "Rule lookup, multi-domain search, best-match selection and report rendering"
//! @acp:domain design
//! @acp:layer feature

pub mod defaults;
pub mod generator;
pub mod matcher;
pub mod orchestrator;
pub mod presenter;
pub mod rules;
pub mod selector;
pub mod types;

pub use defaults::{split_sections, Field};
pub use generator::DesignSystemGenerator;
pub use matcher::{match_rule, MatchTier, RuleMatch, RuleMatcher};
pub use orchestrator::{budget_for, style_query, DomainResults, SearchOrchestrator, SEARCH_BUDGETS};
pub use presenter::{render, to_box_report, to_markdown, wrap_text, OutputFormat, BOX_WIDTH, CHECKLIST};
pub use rules::{load_rules, REASONING_FILE};
pub use selector::{select_best_match, select_top, BestMatchSelector};
pub use types::*;

use crate::config::Config;
use crate::search::CsvSearchEngine;

/// Generate and render a design system against the configured CSV tables
pub fn generate_design_system(
    config: &Config,
    query: &str,
    project_name: Option<&str>,
    format: OutputFormat,
) -> crate::Result<String> {
    let engine = CsvSearchEngine::new(config.resolved_data_dir());
    let generator = DesignSystemGenerator::new(config, engine);
    let recommendation = generator.generate(query, project_name);
    render(&recommendation, format, config.box_width)
}
