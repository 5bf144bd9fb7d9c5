//! mdbridge CLI - command-line tools for the content bridge.
//!
//! Two jobs: pull a nested string out of a JSON config (the CI-pipeline
//! extractor) and push Markdown to a running bridge server.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{extract, push};

/// Tools for the Markdown content bridge.
#[derive(Parser)]
#[command(name = "mdbridge")]
#[command(author, version)]
#[command(about = "JSON key-path extraction and Markdown push for the content bridge")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  mdbridge extract firebase.json flutter.platforms.android.default.appId
  mdbridge push notes.md
  cat notes.md | mdbridge push")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a string value from a JSON file by dot-separated key path
    #[command(visible_alias = "x")]
    Extract {
        /// Path to the JSON file
        file: PathBuf,

        /// Dot-separated key path (e.g. client.api_key)
        key_path: String,
    },

    /// Push a Markdown file (or stdin) to a running bridge server
    Push {
        /// Markdown file to push; omit or use '-' for stdin
        file: Option<String>,

        /// Bridge server URL
        #[arg(short, long, default_value = "http://127.0.0.1:8080/")]
        server: String,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Usage errors exit 1 like every other failure (clap's default is 2).
    // Help and version output keep exiting 0.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Extract { file, key_path } => extract::run(&file, &key_path),
        Commands::Push { file, server } => push::run(file.as_deref(), &server).await,
    }
}
