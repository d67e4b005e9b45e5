//! Configuration management

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{
    DEFAULT_FETCH_ATTEMPTS, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LIST_ENDPOINT, DEFAULT_PAGE_SIZE,
    DEFAULT_SWIPE_THRESHOLD, DEFAULT_TAP_SLOP,
};
use crate::errors::{Result, SwipeDeckError};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub fetch: FetchConfig,
    pub gesture: GestureConfig,
    pub log_level: String,
}

/// Profile list endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// List endpoint without query string
    pub endpoint: String,
    /// Value sent as the `limit` query parameter
    pub page_size: u32,
    pub timeout_secs: u64,
    /// Total attempts made by the transport (1 = no retry)
    pub max_attempts: usize,
    pub user_agent: Option<String>,
}

/// Swipe gesture tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Horizontal distance beyond which a drag resolves into like/pass
    pub swipe_threshold: f64,
    /// Maximum displacement for a gesture to still count as a tap
    pub tap_slop: f64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            gesture: GestureConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_LIST_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            max_attempts: DEFAULT_FETCH_ATTEMPTS,
            user_agent: None,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self { swipe_threshold: DEFAULT_SWIPE_THRESHOLD, tap_slop: DEFAULT_TAP_SLOP }
    }
}

impl DeckConfig {
    /// Check every section, returning the first problem found.
    ///
    /// # Errors
    /// Returns `SwipeDeckError::Config` describing the offending field.
    pub fn validate(&self) -> Result<()> {
        self.fetch.validate()?;
        self.gesture.validate()
    }
}

impl FetchConfig {
    /// # Errors
    /// Returns `SwipeDeckError::Config` for a zero page size, zero attempts,
    /// a zero timeout, or an endpoint that is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(SwipeDeckError::Config("page_size must be at least 1".into()));
        }
        if self.max_attempts == 0 {
            return Err(SwipeDeckError::Config("max_attempts must be at least 1".into()));
        }
        if self.timeout_secs == 0 {
            return Err(SwipeDeckError::Config("timeout_secs must be at least 1".into()));
        }
        let url = Url::parse(&self.endpoint).map_err(|e| {
            SwipeDeckError::Config(format!("Invalid endpoint '{}': {}", self.endpoint, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(SwipeDeckError::Config(format!("Unsupported endpoint scheme: {other}"))),
        }
    }
}

impl GestureConfig {
    /// # Errors
    /// Returns `SwipeDeckError::Config` unless the threshold is a positive
    /// finite distance and the tap slop is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err(SwipeDeckError::Config(format!(
                "swipe_threshold must be positive, got {}",
                self.swipe_threshold
            )));
        }
        if !self.tap_slop.is_finite() || self.tap_slop < 0.0 {
            return Err(SwipeDeckError::Config(format!(
                "tap_slop must not be negative, got {}",
                self.tap_slop
            )));
        }
        Ok(())
    }
}
