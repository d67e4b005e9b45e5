//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Fetch defaults
pub const DEFAULT_LIST_ENDPOINT: &str = "https://api.escuelajs.co/api/v1/users";
pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FETCH_ATTEMPTS: usize = 1;

// Stack layout
pub const STACK_OFFSET_STEP: f64 = 10.0;
pub const STACK_SCALE_STEP: f64 = 0.05;

// Gesture tuning
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 120.0;
pub const DEFAULT_TAP_SLOP: f64 = 10.0;
pub const ROTATION_DIVISOR: f64 = 20.0;
pub const VERTICAL_FOLLOW_FACTOR: f64 = 0.1;
pub const FLY_OUT_DISTANCE: f64 = 1000.0;

// Indicator stamps
pub const LIKE_STAMP_ROTATION_DEGREES: f64 = -20.0;
pub const NOPE_STAMP_ROTATION_DEGREES: f64 = 20.0;

// Fallback labels
pub const NO_NAME_LABEL: &str = "No name";
pub const NO_EMAIL_LABEL: &str = "No email";
pub const EXHAUSTED_MESSAGE: &str = "That's all folks!";
