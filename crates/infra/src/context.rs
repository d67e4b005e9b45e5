//! Runtime context - wires configuration, fetcher and deck controller

use std::sync::Arc;
use std::time::Duration;

use swipedeck_core::{DeckController, DeckHandle, ProfileFetcher};
use swipedeck_domain::{DeckConfig, Result, SwipeDeckError};
use tokio::task::JoinHandle;

use crate::fetcher::HttpProfileFetcher;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Type alias for the fetcher port trait object
type DynProfileFetcher = dyn ProfileFetcher + 'static;

/// Running deck plus the dependencies it was built from
pub struct DeckRuntime {
    pub config: DeckConfig,
    pub fetcher: Arc<DynProfileFetcher>,
    deck: DeckHandle,
    task: JoinHandle<()>,
}

impl DeckRuntime {
    /// Validate `config`, build the HTTP fetcher and spawn the controller.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns `SwipeDeckError::Config` for an invalid configuration or
    /// `SwipeDeckError::Network` if the HTTP client cannot be built.
    pub fn start(config: DeckConfig) -> Result<Self> {
        config.validate()?;
        let fetcher: Arc<DynProfileFetcher> = Arc::new(HttpProfileFetcher::from_config(&config.fetch)?);
        Ok(Self::start_with_fetcher(config, fetcher))
    }

    /// Spawn the controller around an already-built fetcher.
    pub fn start_with_fetcher(config: DeckConfig, fetcher: Arc<DynProfileFetcher>) -> Self {
        let (deck, task) = DeckController::spawn(Arc::clone(&fetcher), config.gesture);
        tracing::info!(
            endpoint = %config.fetch.endpoint,
            page_size = config.fetch.page_size,
            "deck runtime started"
        );
        Self { config, fetcher, deck, task }
    }

    /// Handle for issuing commands and reading views
    pub fn deck(&self) -> &DeckHandle {
        &self.deck
    }

    /// Stop the controller and wait for its task to finish.
    ///
    /// # Errors
    /// Returns `SwipeDeckError::Internal` if the task panicked or did not
    /// stop in time.
    pub async fn shutdown(self) -> Result<()> {
        // Already stopped is fine; the join below reports real failures.
        let _ = self.deck.shutdown();

        tokio::time::timeout(SHUTDOWN_TIMEOUT, self.task)
            .await
            .map_err(|_| {
                tracing::error!(timeout_secs = SHUTDOWN_TIMEOUT.as_secs(), "deck shutdown timed out");
                SwipeDeckError::Internal("deck controller did not stop in time".into())
            })?
            .map_err(|err| SwipeDeckError::Internal(format!("deck controller task failed: {err}")))?;

        tracing::info!("deck runtime stopped");
        Ok(())
    }
}
