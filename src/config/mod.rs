//! Configuration for the component gallery and CLI
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/bemkit/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::style::SheetKind;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod gallery;
mod logging;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use gallery::{FileGallery, GalleryConfig};
pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const ENV_STYLESHEET: &str = "BEMKIT_STYLESHEET";
const ENV_LOG_LEVEL: &str = "BEMKIT_LOG_LEVEL";
const ENV_NO_TUI: &str = "BEMKIT_NO_TUI";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Stylesheet used by the terminal host: "default" or "mono"
    pub stylesheet: SheetKind,

    /// Whether to run the interactive gallery (false prints HTML instead)
    pub enable_tui: bool,

    /// Gallery presentation settings
    pub gallery: GalleryConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Values that were not understood and fell back to defaults.
    /// Collected here because tracing is not initialized yet at load time.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stylesheet: SheetKind::Default,
            enable_tui: true,
            gallery: GalleryConfig::default(),
            logging: LoggingConfig::default(),
            warnings: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub stylesheet: Option<String>,

    /// Optional [gallery] section
    pub gallery: Option<FileGallery>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/bemkit/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("bemkit").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        // Config is optional, so failures here are ignored
        let _ = Self::write_default(&path);
    }

    /// Write the default template to `path`, replacing any existing file
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }

        // Config::default().to_toml() is the single source of truth
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("writing config file {}", path.display()))
    }

    /// Load file config if it exists
    ///
    /// A missing file means defaults. A file that exists but cannot be read
    /// or parsed is an error: a broken config should fail loudly rather than
    /// silently fall back while the user debugs the wrong thing.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse_file_config(&contents).with_context(|| {
                format!(
                    "failed to parse {} (check quotes, true/false values and section names; \
                     `bemkit config --reset` restores the defaults)",
                    path.display()
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("cannot read {}", path.display())),
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge an already-parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();

        // Stylesheet: env > file > default
        let stylesheet = match env(ENV_STYLESHEET).or(file.stylesheet) {
            Some(name) => SheetKind::parse(&name).unwrap_or_else(|| {
                warnings.push(format!("unknown stylesheet {name:?}, using \"default\""));
                SheetKind::Default
            }),
            None => SheetKind::Default,
        };

        // TUI toggle: env only (runtime flag)
        let enable_tui = env(ENV_NO_TUI)
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let gallery = GalleryConfig::from_file(file.gallery, &mut warnings);

        // Log level: env > file > default (RUST_LOG still wins at subscriber init)
        let mut logging = LoggingConfig::from_file(file.logging, &mut warnings);
        if let Some(level) = env(ENV_LOG_LEVEL) {
            logging.level = level;
        }

        Self {
            stylesheet,
            enable_tui,
            gallery,
            logging,
            warnings,
        }
    }
}
