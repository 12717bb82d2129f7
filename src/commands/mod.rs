//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule.

pub mod design;
pub mod rules;
pub mod search;

pub use design::{execute_design_system, DesignOptions};
pub use rules::{execute_rules, RulesOptions};
pub use search::{execute_search, execute_stack, format_output, SearchOptions, StackOptions};
