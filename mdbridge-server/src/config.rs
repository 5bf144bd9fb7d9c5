//! Configuration loading from `.mdbridge.toml`.
//!
//! Configuration is optional: defaults are used if no file exists, and a
//! file that fails to parse is logged as a warning and ignored. Command-line
//! flags override config values.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! file = "content.md"
//!
//! [render]
//! refresh_secs = 5
//! syntax_theme = "base16-ocean.dark"
//! ```

use serde::Deserialize;
use std::path::Path;

/// Root configuration structure loaded from `.mdbridge.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct BridgeConfig {
    /// Network binding and snapshot location.
    #[serde(default)]
    pub server: ServerSection,

    /// Rendering preferences for the served page.
    #[serde(default)]
    pub render: RenderSection,
}

/// `[server]` section.
#[derive(Debug, Deserialize, Default)]
pub struct ServerSection {
    /// Interface to bind. Default: all interfaces (`0.0.0.0`).
    #[serde(default)]
    pub host: Option<String>,

    /// Port to listen on. Default: 8080.
    #[serde(default)]
    pub port: Option<u16>,

    /// Snapshot file path, relative to the working directory.
    /// Default: `content.md`.
    #[serde(default)]
    pub file: Option<String>,
}

/// `[render]` section.
#[derive(Debug, Deserialize, Default)]
pub struct RenderSection {
    /// Auto-refresh interval of the served page, in seconds. Default: 5.
    #[serde(default)]
    pub refresh_secs: Option<u32>,

    /// Syntect theme for fenced code blocks. Default: `base16-ocean.dark`.
    #[serde(default)]
    pub syntax_theme: Option<String>,
}

/// Built-in defaults, used when neither a flag nor the config file sets a value.
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FILE: &str = "content.md";
pub const DEFAULT_REFRESH_SECS: u32 = 5;
pub const DEFAULT_SYNTAX_THEME: &str = "base16-ocean.dark";

/// Command-line overrides for config values.
#[derive(Debug, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub file: Option<String>,
}

/// Fully resolved runtime settings.
#[derive(Debug, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub file: String,
    pub refresh_secs: u32,
    pub syntax_theme: String,
}

impl Settings {
    /// Resolve each value as: CLI flag > config file > built-in default.
    pub fn resolve(overrides: Overrides, config: BridgeConfig) -> Self {
        Self {
            host: overrides
                .host
                .or(config.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(config.server.port).unwrap_or(DEFAULT_PORT),
            file: overrides
                .file
                .or(config.server.file)
                .unwrap_or_else(|| DEFAULT_FILE.to_string()),
            refresh_secs: config.render.refresh_secs.unwrap_or(DEFAULT_REFRESH_SECS),
            syntax_theme: config
                .render
                .syntax_theme
                .unwrap_or_else(|| DEFAULT_SYNTAX_THEME.to_string()),
        }
    }
}

impl BridgeConfig {
    /// Load configuration from `.mdbridge.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".mdbridge.toml");
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse .mdbridge.toml: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read .mdbridge.toml: {}", e);
                }
            }
        }
        Self::default()
    }
}
