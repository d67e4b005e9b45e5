//! Adapters implementing the `ProfileFetcher` port

pub mod http_fetcher;

pub use http_fetcher::HttpProfileFetcher;
