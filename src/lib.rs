#![forbid(unsafe_code)]

//! @acp:module "UI Pro Library"
//! @acp:summary "Design system recommendations from searchable UI/UX style guide tables"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # uipro
//!
//! Turns a free-text product description into a design system
//! recommendation: landing pattern, visual style, color palette,
//! typography, key effects, anti-patterns and a pre-delivery checklist.
//!
//! ## Features
//!
//! - **Rule Table**: category reasoning rules loaded from `ui-reasoning.csv`
//! - **Tiered Matching**: exact, substring, then keyword category lookup
//! - **BM25 Search**: lexical ranking over one CSV table per domain
//! - **Reports**: box, Markdown or JSON output
//!
//! ## Example
//!
//! ```rust,no_run
//! use uipro::{generate_design_system, Config, OutputFormat};
//!
//! fn main() -> uipro::Result<()> {
//!     let config = Config::load_or_default(".uipro.config.json")?;
//!     let report = generate_design_system(
//!         &config,
//!         "beauty spa wellness service",
//!         Some("Serenity Spa"),
//!         OutputFormat::Markdown,
//!     )?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod design;
pub mod error;
pub mod search;

pub use config::Config;
pub use design::{
    generate_design_system, match_rule, select_best_match, DesignSystemGenerator, OutputFormat,
    ReasoningRule, Recommendation, RuleMatcher, ScoringWeights,
};
pub use error::{Result, UiProError};
pub use search::{CsvSearchEngine, Domain, SearchProvider, SearchResponse, SearchRow, Stack};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
