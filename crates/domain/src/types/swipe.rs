//! Swipe gesture values

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Pointer delta from the start of a gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the gesture origin.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Outcome of a finished drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDecision {
    /// Right swipe past the threshold
    Liked,
    /// Left swipe past the threshold
    Passed,
    /// Released inside the threshold; the card snaps back
    Cancelled,
}

impl_domain_status_conversions!(SwipeDecision {
    Liked => "liked",
    Passed => "passed",
    Cancelled => "cancelled",
});

impl SwipeDecision {
    /// Classify a release using horizontal travel only.
    ///
    /// Crossing requires strictly exceeding `threshold` in either direction.
    pub fn from_horizontal(x: f64, threshold: f64) -> Self {
        if x > threshold {
            Self::Liked
        } else if x < -threshold {
            Self::Passed
        } else {
            Self::Cancelled
        }
    }

    /// `Some(liked)` for resolved swipes, `None` for a snap-back.
    pub fn liked(self) -> Option<bool> {
        match self {
            Self::Liked => Some(true),
            Self::Passed => Some(false),
            Self::Cancelled => None,
        }
    }
}
