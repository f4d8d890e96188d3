//! refdoc CLI - documentation navigation and API explorer configuration.
//!
//! Provides commands for:
//! - `check`: Validate the navigation document and explorer settings
//! - `nav`: Print the navigation export consumed by the site renderer
//! - `explorer`: Print the explorer widget configuration for an origin

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExplorerArgs, NavArgs};
use output::Output;

/// refdoc - documentation navigation and API explorer configuration.
#[derive(Parser)]
#[command(name = "refdoc", version, about)]
struct Cli {
    /// Enable verbose output (INFO logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate navigation and explorer configuration.
    Check(CheckArgs),
    /// Print the navigation export as JSON.
    Nav(NavArgs),
    /// Print the resolved explorer widget configuration as JSON.
    Explorer(ExplorerArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Nav(args) => args.execute(&output),
        Commands::Explorer(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
