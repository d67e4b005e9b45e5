//! Configuration loader
//!
//! Loads deck configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Environment variables, when `SWIPEDECK_ENDPOINT` is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. Otherwise built-in defaults
//!
//! Whatever the source, the result is validated before it is returned.
//!
//! ## Environment Variables
//! - `SWIPEDECK_ENDPOINT`: List endpoint (required for env loading)
//! - `SWIPEDECK_PAGE_SIZE`: `limit` query value
//! - `SWIPEDECK_TIMEOUT_SECS`: HTTP request timeout
//! - `SWIPEDECK_MAX_ATTEMPTS`: Transport attempts (1 = no retry)
//! - `SWIPEDECK_USER_AGENT`: Optional User-Agent header
//! - `SWIPEDECK_SWIPE_THRESHOLD`: Drag distance that resolves a swipe
//! - `SWIPEDECK_TAP_SLOP`: Maximum movement for a tap
//! - `SWIPEDECK_LOG_LEVEL`: Default log filter
//!
//! ## File Locations
//! `swipedeck.{json,toml}` then `config.{json,toml}` in the working
//! directory, its parent, and next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use swipedeck_domain::{DeckConfig, Result, SwipeDeckError};

const FILE_STEMS: [&str; 2] = ["swipedeck", "config"];
const FILE_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Load configuration with automatic fallback strategy.
///
/// # Errors
/// Returns `SwipeDeckError::Config` if the chosen source is malformed or the
/// resulting configuration fails validation. A missing environment and a
/// missing file are not errors; defaults apply.
pub fn load() -> Result<DeckConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(e) if std::env::var_os("SWIPEDECK_ENDPOINT").is_some() => return Err(e),
        Err(e) => tracing::debug!(error = %e, "Environment incomplete, trying file"),
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No config file found, using defaults");
            let config = DeckConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

/// Load configuration from environment variables.
///
/// `SWIPEDECK_ENDPOINT` must be present; the remaining variables fall back
/// to defaults when unset.
///
/// # Errors
/// Returns `SwipeDeckError::Config` if the endpoint is missing, a value does
/// not parse, or validation fails.
pub fn load_from_env() -> Result<DeckConfig> {
    let mut config = DeckConfig::default();

    config.fetch.endpoint = env_var("SWIPEDECK_ENDPOINT")?;
    if let Some(page_size) = env_parse::<u32>("SWIPEDECK_PAGE_SIZE", "page size")? {
        config.fetch.page_size = page_size;
    }
    if let Some(timeout) = env_parse::<u64>("SWIPEDECK_TIMEOUT_SECS", "timeout")? {
        config.fetch.timeout_secs = timeout;
    }
    if let Some(attempts) = env_parse::<usize>("SWIPEDECK_MAX_ATTEMPTS", "max attempts")? {
        config.fetch.max_attempts = attempts;
    }
    if let Ok(agent) = std::env::var("SWIPEDECK_USER_AGENT") {
        config.fetch.user_agent = Some(agent);
    }

    if let Some(threshold) = env_parse::<f64>("SWIPEDECK_SWIPE_THRESHOLD", "swipe threshold")? {
        config.gesture.swipe_threshold = threshold;
    }
    if let Some(slop) = env_parse::<f64>("SWIPEDECK_TAP_SLOP", "tap slop")? {
        config.gesture.tap_slop = slop;
    }
    if let Ok(level) = std::env::var("SWIPEDECK_LOG_LEVEL") {
        config.log_level = level;
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations. JSON and TOML are
/// detected by extension; omitted sections take their defaults.
///
/// # Errors
/// Returns `SwipeDeckError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Validation fails
pub fn load_from_file(path: Option<PathBuf>) -> Result<DeckConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SwipeDeckError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SwipeDeckError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SwipeDeckError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration, detecting the format from the file extension.
fn parse_config(contents: &str, path: &Path) -> Result<DeckConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SwipeDeckError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SwipeDeckError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(SwipeDeckError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// First existing config file among the standard locations, if any.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    candidate_paths(&dirs).into_iter().find(|path| path.exists())
}

fn candidate_paths(dirs: &[PathBuf]) -> Vec<PathBuf> {
    dirs.iter()
        .flat_map(|dir| {
            FILE_STEMS.iter().flat_map(move |stem| {
                FILE_EXTENSIONS.iter().map(move |ext| dir.join(format!("{stem}.{ext}")))
            })
        })
        .collect()
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        SwipeDeckError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional environment variable, `None` when unset.
fn env_parse<T>(key: &str, label: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| SwipeDeckError::Config(format!("Invalid {}: {}", label, e))),
        Err(_) => Ok(None),
    }
}
