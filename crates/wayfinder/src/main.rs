//! Wayfinder CLI - sidebar navigation toolkit for documentation sites.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::OutputFormat;

#[derive(Parser)]
#[command(name = "wayfinder")]
#[command(about = "Sidebar navigation toolkit for documentation sites")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a sidebar configuration
    Check {
        /// Configuration file (defaults to wayfinder.toml setting)
        file: Option<PathBuf>,

        /// Also verify document ids and directories against a content root
        #[arg(long)]
        content_dir: Option<PathBuf>,
    },

    /// Print sidebar trees as an outline
    Show {
        /// Configuration file (defaults to wayfinder.toml setting)
        file: Option<PathBuf>,

        /// Only print the named tree
        #[arg(short, long)]
        tree: Option<String>,
    },

    /// Re-serialize a configuration in canonical form
    Export {
        /// Configuration file (defaults to wayfinder.toml setting)
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Expand autogenerated placeholders against a content root
    Expand {
        /// Configuration file (defaults to wayfinder.toml setting)
        file: Option<PathBuf>,

        /// Content root (defaults to wayfinder.toml setting)
        #[arg(long)]
        content_dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Scaffold a starter configuration in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Check { file, content_dir } => {
            commands::check::run(file, content_dir)?;
        }
        Commands::Show { file, tree } => {
            commands::show::run(file, tree)?;
        }
        Commands::Export {
            file,
            format,
            output,
        } => {
            commands::export::run(file, format, output)?;
        }
        Commands::Expand {
            file,
            content_dir,
            format,
            output,
        } => {
            commands::expand::run(file, content_dir, format, output)?;
        }
        Commands::Init { yes } => {
            commands::init::run(yes)?;
        }
    }

    Ok(())
}
