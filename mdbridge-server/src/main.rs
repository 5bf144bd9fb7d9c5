//! mdbridge server - content bridge daemon.
//!
//! A single binary that accepts posted Markdown, persists it to a flat
//! snapshot file, and serves the rendered HTML back with auto-refresh so a
//! tablet or second screen can mirror whatever was last pushed.

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mdbridge_core::{RenderOptions, Renderer, SnapshotStore};
use mdbridge_server::config::{Overrides, Settings};
use mdbridge_server::{create_router, AppState, BridgeConfig};

/// Markdown content bridge server
#[derive(Parser, Debug)]
#[command(name = "mdbridge-server")]
#[command(about = "Serves posted Markdown as styled, auto-refreshing HTML")]
#[command(version)]
struct Cli {
    /// Interface to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Snapshot file path (overrides config)
    #[arg(short, long)]
    file: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    // Resolution order: CLI flag > .mdbridge.toml > built-in default
    let config = BridgeConfig::load(Path::new("."));
    let settings = Settings::resolve(
        Overrides {
            host: cli.host,
            port: cli.port,
            file: cli.file,
        },
        config,
    );

    let store = SnapshotStore::new(&settings.file);
    let renderer = Renderer::new(RenderOptions {
        title: settings.file.clone(),
        refresh_secs: settings.refresh_secs,
        syntax_theme: settings.syntax_theme,
    });

    let state = Arc::new(AppState::new(store, renderer));
    let app = create_router(state);

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server active on {} (persistence via {})", addr, settings.file);

    axum::serve(listener, app).await?;
    Ok(())
}
