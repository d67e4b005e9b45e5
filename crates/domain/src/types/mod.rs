//! Domain types and models

pub mod load_state;
pub mod profile;
pub mod swipe;

pub use load_state::LoadState;
pub use profile::{AvatarSource, AvatarView, ImagePhase, Profile, ProfileDetail, ProfileId};
pub use swipe::{SwipeDecision, Translation};
