//! Single-writer deck controller
//!
//! Owns the profile store and the card stack engine on one task. Fetches run
//! elsewhere and report back through the controller's mailbox, so every
//! mutation of list, load state and drag session happens in one place.

pub mod controller;
pub mod view;

pub use controller::{DeckController, DeckHandle};
pub use view::{DeckPhase, DeckView};
