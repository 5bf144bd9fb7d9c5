//! Push command: submit Markdown to a running bridge server.
//!
//! The writer side of the bridge: reads a file (or stdin) and POSTs the raw
//! text to the server, which persists and re-renders it.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Read;
use tracing::debug;

pub async fn run(file: Option<&str>, server: &str) -> Result<()> {
    let text = match file {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path))?,
    };

    debug!(bytes = text.len(), server, "pushing content");

    let client = reqwest::Client::new();
    let response = client
        .post(server)
        .body(text.clone())
        .send()
        .await
        .with_context(|| format!("Failed to reach bridge server at {}", server))?;
    response
        .error_for_status()
        .context("Bridge server rejected the submission")?;

    println!(
        "{} Pushed {} bytes to {}",
        "✓".green(),
        text.len(),
        server
    );
    Ok(())
}
