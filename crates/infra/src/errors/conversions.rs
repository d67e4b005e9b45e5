//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use swipedeck_domain::{FetchError, SwipeDeckError};
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SwipeDeckError);

impl From<InfraError> for SwipeDeckError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SwipeDeckError> for InfraError {
    fn from(value: SwipeDeckError) -> Self {
        InfraError(value)
    }
}

/// Classify an external failure within the fetch taxonomy.
pub(crate) trait IntoFetchError {
    fn into_fetch_error(self) -> FetchError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → FetchError */
/* -------------------------------------------------------------------------- */

impl IntoFetchError for HttpError {
    fn into_fetch_error(self) -> FetchError {
        if self.is_builder() {
            return FetchError::InvalidUrl(self.to_string());
        }

        if self.is_timeout() {
            return FetchError::Transport("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return FetchError::Transport("HTTP connection failure".into());
        }

        if self.is_decode() {
            return FetchError::Decode(self.to_string());
        }

        if let Some(status) = self.status() {
            return FetchError::Transport(status_message(status));
        }

        FetchError::Transport(self.to_string())
    }
}

/// `HTTP 503 Service Unavailable` style message for a status code.
pub(crate) fn status_message(status: reqwest::StatusCode) -> String {
    format!("HTTP {} {}", status.as_u16(), status.canonical_reason().unwrap_or("unknown status"))
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → FetchError */
/* -------------------------------------------------------------------------- */

impl IntoFetchError for JsonError {
    fn into_fetch_error(self) -> FetchError {
        FetchError::Decode(self.to_string())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → FetchError */
/* -------------------------------------------------------------------------- */

impl IntoFetchError for UrlError {
    fn into_fetch_error(self) -> FetchError {
        FetchError::InvalidUrl(self.to_string())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SwipeDeckError (client construction) */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(SwipeDeckError::Network(value.into_fetch_error().to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
