//! Card stack interaction engine
//!
//! `geometry` lays out the stack; `gesture` owns the drag state machine.

pub mod geometry;
pub mod gesture;

pub use geometry::{stack_geometry, CardGeometry, DragVisual};
pub use gesture::{CardStackEngine, DeckEvent, DragOutcome, DragSession};
