//! Stack layout
//!
//! Pure mapping from the ordered profile list to per-card render values.
//! Index 0 is the bottom card; the last index is the top.

use serde::Serialize;
use swipedeck_domain::constants::{
    FLY_OUT_DISTANCE, LIKE_STAMP_ROTATION_DEGREES, NOPE_STAMP_ROTATION_DEGREES, ROTATION_DIVISOR,
    STACK_OFFSET_STEP, STACK_SCALE_STEP, VERTICAL_FOLLOW_FACTOR,
};
use swipedeck_domain::{Profile, ProfileId, Translation};

/// Render values for one card in the stack
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardGeometry {
    pub profile_id: ProfileId,
    /// Distance from the top; 0 is the top card
    pub depth: usize,
    pub vertical_offset: f64,
    pub scale: f64,
    /// Higher values draw above lower ones
    pub z_order: usize,
    /// Only the top card accepts pointer input
    pub interactive: bool,
    /// Live drag transform, present only on the card being dragged
    pub drag: Option<DragVisual>,
}

/// Visual state derived from the active drag translation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragVisual {
    pub offset_x: f64,
    /// Damped vertical follow
    pub offset_y: f64,
    pub rotation_degrees: f64,
    pub like_opacity: f64,
    pub nope_opacity: f64,
    /// Fixed tilt of the LIKE stamp
    pub like_stamp_rotation: f64,
    /// Fixed tilt of the NOPE stamp
    pub nope_stamp_rotation: f64,
}

impl DragVisual {
    pub fn from_translation(translation: Translation, threshold: f64) -> Self {
        let like_opacity =
            if translation.x > 0.0 { (translation.x / threshold).clamp(0.0, 1.0) } else { 0.0 };
        let nope_opacity =
            if translation.x < 0.0 { (-translation.x / threshold).clamp(0.0, 1.0) } else { 0.0 };

        Self {
            offset_x: translation.x,
            offset_y: translation.y * VERTICAL_FOLLOW_FACTOR,
            rotation_degrees: translation.x / ROTATION_DIVISOR,
            like_opacity,
            nope_opacity,
            like_stamp_rotation: LIKE_STAMP_ROTATION_DEGREES,
            nope_stamp_rotation: NOPE_STAMP_ROTATION_DEGREES,
        }
    }
}

/// Horizontal target for the fly-out animation of a resolved swipe
pub fn exit_offset_x(liked: bool) -> f64 {
    if liked {
        FLY_OUT_DISTANCE
    } else {
        -FLY_OUT_DISTANCE
    }
}

/// Lay out the stack without any drag applied.
#[allow(clippy::cast_precision_loss)]
pub fn stack_geometry(profiles: &[Profile]) -> Vec<CardGeometry> {
    let count = profiles.len();
    profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| {
            let depth = count - 1 - index;
            CardGeometry {
                profile_id: profile.id,
                depth,
                vertical_offset: depth as f64 * STACK_OFFSET_STEP,
                scale: 1.0 - depth as f64 * STACK_SCALE_STEP,
                z_order: index,
                interactive: depth == 0,
                drag: None,
            }
        })
        .collect()
}
