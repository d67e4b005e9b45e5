//! # SwipeDeck Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The HTTP transport and the remote profile fetcher
//! - Configuration loading from environment and files
//! - Logging setup
//! - The runtime context that wires them to the deck controller
//!
//! ## Architecture
//! - Implements traits defined in `swipedeck-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod config;
pub mod context;
pub mod errors;
pub mod fetcher;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use context::DeckRuntime;
pub use errors::InfraError;
pub use fetcher::HttpProfileFetcher;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::init_tracing;
