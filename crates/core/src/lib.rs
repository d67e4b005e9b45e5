//! # SwipeDeck Core
//!
//! Pure interaction logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - The profile store and its fetch port
//! - The card stack engine (layout and drag state machine)
//! - The single-writer deck controller that wires them together
//!
//! ## Architecture Principles
//! - Only depends on `swipedeck-domain`
//! - No HTTP or platform code
//! - External fetching via the [`ProfileFetcher`] trait
//! - Engine decisions are pure; mutation happens in the store

pub mod deck;
pub mod engine;
pub mod store;

// Re-export specific items to avoid ambiguity
pub use deck::{DeckController, DeckHandle, DeckPhase, DeckView};
pub use engine::{
    stack_geometry, CardGeometry, CardStackEngine, DeckEvent, DragOutcome, DragSession, DragVisual,
};
pub use store::{LoadTicket, ProfileFetcher, ProfileStore, StoreSnapshot};
