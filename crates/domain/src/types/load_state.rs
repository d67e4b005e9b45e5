//! Fetch lifecycle state

use serde::{Deserialize, Serialize};

use crate::errors::FetchError;

/// Where the profile list is in its fetch lifecycle.
///
/// `Idle → Loading` on fetch start, `Loading → Loaded(None)` on success,
/// `Loading → Loaded(Some(e))` on failure. A re-fetch re-enters `Loading`
/// from any state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "error", rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Option<FetchError>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Error from the most recent completed fetch, if it failed.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Loaded(Some(err)) => Some(err),
            _ => None,
        }
    }

    /// Human-readable message for the presentation layer.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}
