//! @acp:module "Design System Command"
//! @acp:summary "Generate a design system recommendation for a product description"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::design::{generate_design_system, OutputFormat};

/// Options for the design-system command
#[derive(Debug, Clone, Default)]
pub struct DesignOptions {
    /// Free-text product description
    pub query: String,
    /// Project name shown in the report header
    pub project_name: Option<String>,
    /// Output format
    pub format: OutputFormat,
}

/// Execute the design-system command
pub fn execute_design_system(options: DesignOptions, config: &Config) -> Result<()> {
    let data_dir = config.resolved_data_dir();
    if !data_dir.exists() {
        eprintln!(
            "{} Data directory {} not found, falling back to defaults",
            style("!").yellow(),
            data_dir.display()
        );
    }

    let output = generate_design_system(
        config,
        &options.query,
        options.project_name.as_deref(),
        options.format,
    )?;
    println!("{}", output);
    Ok(())
}
