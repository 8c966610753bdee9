//! checklist CLI
//!
//! Pick items from a list in the terminal, or fill in a burger order.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use checklist::error::Result;
use checklist::logging;
use checklist::report::{format_order, format_selection};
use checklist::tui::{run_checklist, run_order};
use checklist::types::{OrderConfig, OutputFormat, SelectConfig, DEFAULT_ITEMS, DEFAULT_TITLE};

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "Interactive terminal checklist")]
#[command(version)]
struct Cli {
    /// Append logs to this file (level from RUST_LOG, default info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check items off a list, then print what was checked (default)
    Select {
        /// Items to choose from (default: Carrots Celery Cinnamon)
        items: Vec<String>,

        /// Header line shown above the list
        #[arg(long)]
        title: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Order a burger through a two-page form
    Order {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting with failure");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        logging::init(path)?;
    }

    match cli.command {
        None => cmd_select(SelectConfig::default()),
        Some(Commands::Select { items, title, format }) => {
            cmd_select(select_config(items, title, format.into()))
        }
        Some(Commands::Order { format }) => cmd_order(OrderConfig { format: format.into() }),
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Fill in defaults for anything not given on the command line.
fn select_config(items: Vec<String>, title: Option<String>, format: OutputFormat) -> SelectConfig {
    let items = if items.is_empty() {
        DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect()
    } else {
        items
    };
    SelectConfig {
        title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        items,
        format,
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_select(config: SelectConfig) -> Result<()> {
    let selection = run_checklist(&config)?;
    print!("{}", format_selection(&selection, config.format)?);
    Ok(())
}

fn cmd_order(config: OrderConfig) -> Result<()> {
    let order = run_order(&config)?;
    print!("{}", format_order(&order, config.format)?);
    Ok(())
}
