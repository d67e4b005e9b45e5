//! Profile list ownership and the fetch port that fills it

pub mod ports;
pub mod service;

pub use ports::ProfileFetcher;
pub use service::{LoadTicket, ProfileStore, StoreSnapshot};
