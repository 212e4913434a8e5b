//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.keygrid/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KeygridConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub board_file: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
    pub seed: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BOARD_FILE: &str = "file.txt";
pub const DEFAULT_LOG_FILE: &str = "keygrid.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub board_file: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// `None` seeds values from OS entropy.
    pub seed: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.keygrid/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".keygrid").join("config.toml"))
}

/// Load config from `~/.keygrid/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `KeygridConfig::default()`.
pub fn load_config() -> Result<KeygridConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(KeygridConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<KeygridConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(KeygridConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: KeygridConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Keygrid Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# board_file = "file.txt"      # Or set KEYGRID_FILE, or pass FILE on the command line
# log_file = "keygrid.log"     # Or set KEYGRID_LOG
# log_level = "info"           # "off", "error", "warn", "info", "debug", "trace"
# seed = 42                    # Fixed seed for generated cells; omit for random
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_file` and `cli_seed` come from command-line arguments (None = not specified).
pub fn resolve(config: &KeygridConfig, cli_file: Option<&str>, cli_seed: Option<u64>) -> ResolvedConfig {
    // Board file: CLI → env → config → default
    let board_file = cli_file
        .map(|s| s.to_string())
        .or_else(|| std::env::var("KEYGRID_FILE").ok())
        .or_else(|| config.general.board_file.clone())
        .unwrap_or_else(|| DEFAULT_BOARD_FILE.to_string());

    // Log file: env → config → default
    let log_file = std::env::var("KEYGRID_LOG")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => LevelFilter::from_str(level).unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        board_file: PathBuf::from(board_file),
        log_file: PathBuf::from(log_file),
        log_level,
        seed: cli_seed.or(config.general.seed),
    }
}
