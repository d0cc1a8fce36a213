//! mmproj CLI - Command-line interface for mmproj
//!
//! Provides `mmproj save` and `mmproj plan`.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mmproj")]
#[command(about = "mmproj - Multimedia project scaffolder")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the project folders and save the document into them
    Save {
        /// Chosen save path; its file name becomes the project name
        path: String,
        /// Current working document to save
        #[arg(short, long)]
        document: PathBuf,
        /// Document extension (defaults to the document's own)
        #[arg(short, long)]
        extension: Option<String>,
    },
    /// Show the folders and save path without touching the filesystem
    Plan {
        /// Chosen save path; its file name becomes the project name
        path: String,
        /// Document extension
        #[arg(short, long, default_value = "blend")]
        extension: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Save {
            path,
            document,
            extension,
        } => commands::save::execute(&path, document, extension.as_deref()),
        Commands::Plan {
            path,
            extension,
            json,
        } => commands::plan::execute(&path, &extension, json),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
