//! oidfmt CLI - render decoded object identifiers in textual notations.

mod commands;
mod config;

use std::process;

use clap::{Parser, Subcommand};

use config::OidfmtConfig;

#[derive(Parser)]
#[command(name = "oidfmt", version, about = "Render object identifiers in textual notations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a sequence of arcs
    Format {
        /// Arcs, root first (e.g., 1 2 840 113549)
        arcs: Vec<u64>,
        /// Notation (dot, asn1)
        #[arg(long)]
        notation: Option<String>,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Parse a dotted OID and render it
    Parse {
        /// Dotted OID (e.g., 1.2.840.113549)
        dotted: String,
        /// Notation (dot, asn1)
        #[arg(long)]
        notation: Option<String>,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// List available notations
    Notations,
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = OidfmtConfig::find_and_load(&cwd)?
        .map(|(config, _)| config)
        .unwrap_or_default();

    match cli.command {
        Commands::Format {
            arcs,
            notation,
            format,
        } => {
            let settings = config.settings(notation.as_deref(), format.as_deref())?;
            commands::format::run(&arcs, settings)
        }

        Commands::Parse {
            dotted,
            notation,
            format,
        } => {
            let settings = config.settings(notation.as_deref(), format.as_deref())?;
            commands::parse::run(&dotted, settings)
        }

        Commands::Notations => commands::notations::list(),
    }
}
