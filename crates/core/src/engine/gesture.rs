//! Card stack engine - drag state machine
//!
//! Converts pointer motion on the top card into like/pass decisions. The
//! engine only decides and announces; removing the card from the list is the
//! caller's job.

use serde::Serialize;
use swipedeck_domain::{GestureConfig, Profile, ProfileId, SwipeDecision, Translation};
use tokio::sync::broadcast;
use tracing::debug;

use super::geometry::{exit_offset_x, stack_geometry, CardGeometry, DragVisual};

const EVENT_CAPACITY: usize = 64;

/// Announcements for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeckEvent {
    /// A swipe resolved; the card should be removed from the list
    Removed { id: ProfileId, liked: bool },
    /// A tap selected the card for detail presentation
    Selected { profile: Profile },
}

/// How a finished gesture was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragOutcome {
    Swiped {
        id: ProfileId,
        liked: bool,
        exit_offset_x: f64,
        /// The card was no longer on top when the gesture ended
        forced: bool,
    },
    SnappedBack { id: ProfileId },
    Tapped { id: ProfileId },
}

/// Live pointer interaction bound to one card
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragSession {
    pub card_id: ProfileId,
    pub translation: Translation,
    /// Largest distance from the origin seen during the gesture
    pub peak_displacement: f64,
}

impl DragSession {
    fn new(card_id: ProfileId) -> Self {
        Self { card_id, translation: Translation::ZERO, peak_displacement: 0.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum EngineState {
    Idle,
    Dragging(DragSession),
}

/// Gesture state machine for the card stack
pub struct CardStackEngine {
    config: GestureConfig,
    state: EngineState,
    events: broadcast::Sender<DeckEvent>,
}

impl CardStackEngine {
    pub fn new(config: GestureConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { config, state: EngineState::Idle, events }
    }

    /// Subscribe to removal and selection events
    pub fn subscribe(&self) -> broadcast::Receiver<DeckEvent> {
        self.events.subscribe()
    }

    /// Sender side, for handing out further subscriptions
    pub fn event_sender(&self) -> broadcast::Sender<DeckEvent> {
        self.events.clone()
    }

    pub fn threshold(&self) -> f64 {
        self.config.swipe_threshold
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, EngineState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            EngineState::Dragging(session) => Some(session),
            EngineState::Idle => None,
        }
    }

    /// Stack geometry with the live drag applied to the bound card.
    pub fn render(&self, profiles: &[Profile]) -> Vec<CardGeometry> {
        let mut cards = stack_geometry(profiles);
        if let Some(session) = self.session() {
            if let Some(card) = cards.iter_mut().find(|c| c.profile_id == session.card_id) {
                card.drag = Some(DragVisual::from_translation(session.translation, self.threshold()));
            }
        }
        cards
    }

    /// Open a session on `card_id`.
    ///
    /// Returns `false` (and changes nothing) unless `card_id` is the current
    /// top and no session is active.
    pub fn on_drag_start(&mut self, profiles: &[Profile], card_id: ProfileId) -> bool {
        if let EngineState::Dragging(session) = &self.state {
            debug!(card_id, active = session.card_id, "drag start ignored: session already active");
            return false;
        }
        if profiles.last().map(|p| p.id) != Some(card_id) {
            debug!(card_id, "drag start ignored: card is not on top");
            return false;
        }

        debug!(card_id, "drag started");
        self.state = EngineState::Dragging(DragSession::new(card_id));
        true
    }

    /// Record the latest pointer delta. No-op while idle.
    pub fn on_drag_change(&mut self, translation: Translation) -> Option<DragVisual> {
        let threshold = self.threshold();
        let EngineState::Dragging(session) = &mut self.state else {
            return None;
        };
        session.translation = translation;
        session.peak_displacement = session.peak_displacement.max(translation.magnitude());
        Some(DragVisual::from_translation(translation, threshold))
    }

    /// Resolve the active gesture. No-op while idle.
    ///
    /// Swipes are announced even when the bound card is no longer on top, so
    /// a list change mid-gesture never swallows the user's decision.
    pub fn on_drag_end(&mut self, profiles: &[Profile]) -> Option<DragOutcome> {
        let EngineState::Dragging(session) =
            std::mem::replace(&mut self.state, EngineState::Idle)
        else {
            debug!("drag end ignored: no active session");
            return None;
        };
        let id = session.card_id;
        let decision = SwipeDecision::from_horizontal(session.translation.x, self.threshold());

        let outcome = match decision.liked() {
            Some(liked) => {
                let forced = profiles.last().map(|p| p.id) != Some(id);
                debug!(id, %decision, forced, "swipe resolved");
                self.emit(DeckEvent::Removed { id, liked });
                DragOutcome::Swiped { id, liked, exit_offset_x: exit_offset_x(liked), forced }
            }
            None if session.peak_displacement < self.config.tap_slop
                && self.select(profiles, id) =>
            {
                debug!(id, "gesture treated as tap");
                DragOutcome::Tapped { id }
            }
            None => {
                debug!(id, x = session.translation.x, "swipe cancelled, snapping back");
                DragOutcome::SnappedBack { id }
            }
        };
        Some(outcome)
    }

    /// Select the top card from a discrete tap recognizer.
    ///
    /// Ignored while a drag is active or when `card_id` is not on top.
    pub fn on_tap(&mut self, profiles: &[Profile], card_id: ProfileId) -> bool {
        if self.is_dragging() || profiles.last().map(|p| p.id) != Some(card_id) {
            return false;
        }
        self.select(profiles, card_id)
    }

    fn select(&self, profiles: &[Profile], id: ProfileId) -> bool {
        match profiles.iter().find(|p| p.id == id) {
            Some(profile) => {
                self.emit(DeckEvent::Selected { profile: profile.clone() });
                true
            }
            None => false,
        }
    }

    fn emit(&self, event: DeckEvent) {
        // Nobody listening is fine; the returned outcome still carries it.
        if self.events.send(event).is_err() {
            debug!("deck event dropped: no subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::broadcast::error::TryRecvError;

    use super::*;

    fn stack(ids: &[ProfileId]) -> Vec<Profile> {
        ids.iter().map(|&id| Profile::new(id)).collect()
    }

    fn engine() -> CardStackEngine {
        CardStackEngine::new(GestureConfig::default())
    }

    fn drag(engine: &mut CardStackEngine, profiles: &[Profile], x: f64) -> Option<DragOutcome> {
        let top = profiles.last().map(|p| p.id).unwrap();
        assert!(engine.on_drag_start(profiles, top));
        engine.on_drag_change(Translation::new(x, 0.0));
        engine.on_drag_end(profiles)
    }

    #[test]
    fn right_swipe_past_threshold_likes() {
        let profiles = stack(&[1, 2, 3]);
        let mut engine = engine();
        let mut events = engine.subscribe();

        let outcome = drag(&mut engine, &profiles, 150.0);
        assert_eq!(
            outcome,
            Some(DragOutcome::Swiped { id: 3, liked: true, exit_offset_x: 1000.0, forced: false })
        );
        assert_eq!(events.try_recv().unwrap(), DeckEvent::Removed { id: 3, liked: true });
        assert!(!engine.is_dragging());
    }

    #[test]
    fn left_swipe_past_threshold_passes() {
        let profiles = stack(&[1, 2]);
        let mut engine = engine();
        let mut events = engine.subscribe();

        let outcome = drag(&mut engine, &profiles, -130.0);
        assert!(matches!(outcome, Some(DragOutcome::Swiped { id: 2, liked: false, .. })));
        assert_eq!(events.try_recv().unwrap(), DeckEvent::Removed { id: 2, liked: false });
    }

    #[test]
    fn short_drag_snaps_back_without_event() {
        let profiles = stack(&[1]);
        let mut engine = engine();
        let mut events = engine.subscribe();

        let outcome = drag(&mut engine, &profiles, 50.0);
        assert_eq!(outcome, Some(DragOutcome::SnappedBack { id: 1 }));
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));

        // Translation is reset: no drag visual remains on the card
        let cards = engine.render(&profiles);
        assert!(cards[0].drag.is_none());
    }

    #[test]
    fn drag_end_without_start_is_noop() {
        let profiles = stack(&[1, 2]);
        let mut engine = engine();
        let mut events = engine.subscribe();

        assert_eq!(engine.on_drag_end(&profiles), None);
        assert_eq!(engine.on_drag_end(&[]), None);
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
        assert!(!engine.is_dragging());
    }

    #[test]
    fn drag_change_while_idle_is_noop() {
        let mut engine = engine();
        assert_eq!(engine.on_drag_change(Translation::new(500.0, 0.0)), None);
        assert!(engine.session().is_none());
    }

    #[test]
    fn only_top_card_can_start_drag() {
        let profiles = stack(&[1, 2, 3]);
        let mut engine = engine();
        assert!(!engine.on_drag_start(&profiles, 1));
        assert!(!engine.on_drag_start(&[], 1));
        assert!(engine.on_drag_start(&profiles, 3));
        assert!(!engine.on_drag_start(&profiles, 3), "second session must be refused");
    }

    #[test]
    fn render_attaches_drag_visual_to_bound_card() {
        let profiles = stack(&[1, 2]);
        let mut engine = engine();
        engine.on_drag_start(&profiles, 2);
        engine.on_drag_change(Translation::new(60.0, 20.0));

        let cards = engine.render(&profiles);
        assert!(cards[0].drag.is_none());
        let visual = cards[1].drag.expect("top card carries drag visual");
        assert!((visual.like_opacity - 0.5).abs() < 1e-9);
        assert!((visual.offset_y - 2.0).abs() < 1e-9);
        assert!((visual.rotation_degrees - 3.0).abs() < 1e-9);
    }

    #[test]
    fn decision_uses_last_translation_only() {
        let profiles = stack(&[1]);
        let mut engine = engine();
        engine.on_drag_start(&profiles, 1);
        engine.on_drag_change(Translation::new(400.0, 0.0));
        engine.on_drag_change(Translation::new(30.0, 0.0));
        assert_eq!(engine.on_drag_end(&profiles), Some(DragOutcome::SnappedBack { id: 1 }));
    }

    #[test]
    fn vertical_motion_never_resolves() {
        let profiles = stack(&[1]);
        let mut engine = engine();
        engine.on_drag_start(&profiles, 1);
        engine.on_drag_change(Translation::new(0.0, 900.0));
        assert_eq!(engine.on_drag_end(&profiles), Some(DragOutcome::SnappedBack { id: 1 }));
    }

    #[test]
    fn zero_motion_gesture_selects_card() {
        let profiles = stack(&[1, 2]);
        let mut engine = engine();
        let mut events = engine.subscribe();

        engine.on_drag_start(&profiles, 2);
        engine.on_drag_change(Translation::new(2.0, -3.0));
        assert_eq!(engine.on_drag_end(&profiles), Some(DragOutcome::Tapped { id: 2 }));
        assert_eq!(events.try_recv().unwrap(), DeckEvent::Selected { profile: Profile::new(2) });
    }

    #[test]
    fn wandering_gesture_is_not_a_tap() {
        let profiles = stack(&[1]);
        let mut engine = engine();
        let mut events = engine.subscribe();

        engine.on_drag_start(&profiles, 1);
        engine.on_drag_change(Translation::new(80.0, 0.0));
        engine.on_drag_change(Translation::new(1.0, 0.0));
        assert_eq!(engine.on_drag_end(&profiles), Some(DragOutcome::SnappedBack { id: 1 }));
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn decision_honored_after_list_changes_mid_gesture() {
        let before = stack(&[1, 2, 3]);
        let mut engine = engine();
        let mut events = engine.subscribe();

        engine.on_drag_start(&before, 3);
        engine.on_drag_change(Translation::new(200.0, 0.0));

        let after = stack(&[7, 8]);
        let outcome = engine.on_drag_end(&after);
        assert!(matches!(outcome, Some(DragOutcome::Swiped { id: 3, liked: true, forced: true, .. })));
        assert_eq!(events.try_recv().unwrap(), DeckEvent::Removed { id: 3, liked: true });
    }

    #[test]
    fn discrete_tap_only_on_idle_top_card() {
        let profiles = stack(&[1, 2]);
        let mut engine = engine();
        let mut events = engine.subscribe();

        assert!(!engine.on_tap(&profiles, 1));
        assert!(engine.on_tap(&profiles, 2));
        assert!(matches!(events.try_recv().unwrap(), DeckEvent::Selected { .. }));

        engine.on_drag_start(&profiles, 2);
        assert!(!engine.on_tap(&profiles, 2));
    }

    #[test]
    fn custom_threshold_applies() {
        let profiles = stack(&[1]);
        let mut engine =
            CardStackEngine::new(GestureConfig { swipe_threshold: 40.0, tap_slop: 5.0 });
        assert!(matches!(drag(&mut engine, &profiles, 50.0), Some(DragOutcome::Swiped { .. })));
    }

    #[test]
    fn events_without_subscribers_do_not_fail() {
        let profiles = stack(&[1]);
        let mut engine = engine();
        assert!(matches!(drag(&mut engine, &profiles, 150.0), Some(DragOutcome::Swiped { .. })));
    }

    #[test]
    fn events_serialize_with_kind_tag() {
        let removed = serde_json::to_value(DeckEvent::Removed { id: 4, liked: false }).unwrap();
        assert_eq!(removed, serde_json::json!({"kind": "removed", "id": 4, "liked": false}));

        let selected =
            serde_json::to_value(DeckEvent::Selected { profile: Profile::new(9).with_name("Ana") })
                .unwrap();
        assert_eq!(selected["kind"], "selected");
        assert_eq!(selected["profile"]["name"], "Ana");
        assert!(selected["profile"]["avatar"].is_null());
    }

    #[test]
    fn tap_on_card_removed_mid_gesture_snaps_back() {
        let before = stack(&[1, 2]);
        let mut engine = engine();
        let mut events = engine.subscribe();

        engine.on_drag_start(&before, 2);
        engine.on_drag_change(Translation::new(2.0, 1.0));

        let after = stack(&[5, 6]);
        assert_eq!(engine.on_drag_end(&after), Some(DragOutcome::SnappedBack { id: 2 }));
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
        assert!(!engine.is_dragging());
    }
}
