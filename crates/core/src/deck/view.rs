//! Render snapshot published to the presentation layer

use serde::Serialize;
use swipedeck_domain::constants::EXHAUSTED_MESSAGE;
use swipedeck_domain::LoadState;

use crate::engine::CardGeometry;

/// What the screen should show as a whole
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum DeckPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is in flight; show the progress indicator
    Loading,
    /// Cards are available
    Ready,
    /// Loaded and every card has been swiped away
    Exhausted,
    /// Loaded with an error and nothing to show
    Failed { message: String },
}

impl DeckPhase {
    /// Derive the phase from the store state.
    ///
    /// A failed refresh over an existing stack keeps showing the cards.
    pub fn derive(load_state: &LoadState, has_cards: bool) -> Self {
        match load_state {
            LoadState::Idle => Self::Idle,
            LoadState::Loading => Self::Loading,
            LoadState::Loaded(_) if has_cards => Self::Ready,
            LoadState::Loaded(None) => Self::Exhausted,
            LoadState::Loaded(Some(err)) => Self::Failed { message: err.to_string() },
        }
    }

    /// True once a load has completed, successfully or not
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready | Self::Exhausted | Self::Failed { .. })
    }
}

/// Everything the view needs for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeckView {
    pub phase: DeckPhase,
    /// Bottom card first, top card last
    pub cards: Vec<CardGeometry>,
    /// Message from the last failed fetch, even when cards are still shown
    pub load_error: Option<String>,
    pub revision: u64,
}

impl DeckView {
    /// Text for the empty state, once the deck has been exhausted.
    pub fn empty_message(&self) -> Option<&'static str> {
        matches!(self.phase, DeckPhase::Exhausted).then_some(EXHAUSTED_MESSAGE)
    }

    pub fn top(&self) -> Option<&CardGeometry> {
        self.cards.iter().find(|card| card.interactive)
    }

    pub fn interactive_count(&self) -> usize {
        self.cards.iter().filter(|card| card.interactive).count()
    }
}
