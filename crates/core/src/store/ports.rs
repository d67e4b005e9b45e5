//! Port interfaces for profile retrieval
//!
//! These traits define the boundary between the store and whatever
//! transport produces profile lists.

use async_trait::async_trait;
use swipedeck_domain::{FetchError, Profile};

/// One-shot retrieval of the profile list
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    /// Fetch the current page of profiles in arrival order
    async fn fetch(&self) -> Result<Vec<Profile>, FetchError>;
}
