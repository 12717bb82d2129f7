#![forbid(unsafe_code)]
//! UI Pro Command Line Interface

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use uipro::commands::{
    execute_design_system, execute_rules, execute_search, execute_stack, DesignOptions,
    RulesOptions, SearchOptions, StackOptions,
};
use uipro::search::DEFAULT_MAX_RESULTS;
use uipro::{Config, Domain, OutputFormat, Stack};

#[derive(Parser)]
#[command(name = "uipro")]
#[command(about = "UI Pro - Design system recommendations from UI/UX style guides")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = uipro::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory holding the CSV tables
    #[arg(long, global = true, env = "UIPRO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a design system recommendation
    #[command(visible_alias = "ds")]
    DesignSystem {
        /// Product description, e.g. "beauty spa wellness service"
        query: String,

        /// Project name for the report header
        #[arg(short, long)]
        project_name: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "ascii")]
        format: FormatArg,
    },

    /// Search one style guide domain
    Search {
        /// Search query
        query: String,

        /// Domain to search (detected from the query when omitted)
        #[arg(short, long)]
        domain: Option<Domain>,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search stack-specific guidelines
    Stack {
        /// Search query
        query: String,

        /// Stack to search (html-tailwind, react, nextjs)
        #[arg(short, long)]
        stack: Stack,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List reasoning rules or show which rule a category resolves to
    Rules {
        /// Category to resolve
        #[arg(short = 'm', long = "match")]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Ascii,
    Markdown,
    Json,
}

fn init_tracing(verbose: bool) {
    // RUST_LOG wins over --verbose
    let fallback = if verbose { "uipro=debug" } else { "uipro=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // defaults < config file < UIPRO_DATA_DIR / --data-dir
    let config = Config::load_or_default(&cli.config)?.with_data_dir(cli.data_dir);

    match cli.command {
        Commands::DesignSystem { query, project_name, format } => {
            let format = match format {
                FormatArg::Ascii => OutputFormat::Ascii,
                FormatArg::Markdown => OutputFormat::Markdown,
                FormatArg::Json => OutputFormat::Json,
            };
            let options = DesignOptions { query, project_name, format };
            execute_design_system(options, &config)?;
        }

        Commands::Search { query, domain, max_results, json } => {
            let options = SearchOptions { query, domain, max_results, json };
            execute_search(options, &config)?;
        }

        Commands::Stack { query, stack, max_results, json } => {
            let options = StackOptions { query, stack, max_results, json };
            execute_stack(options, &config)?;
        }

        Commands::Rules { category, json } => {
            let options = RulesOptions { category, json };
            execute_rules(options, &config)?;
        }
    }

    Ok(())
}
