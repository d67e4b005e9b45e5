//! HTTP transport shared by the remote fetchers

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
