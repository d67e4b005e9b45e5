//! Shared test helpers for `swipedeck-core` integration tests.
//!
//! Provides fetch doubles with controllable timing so tests can drive the
//! deck controller through load races deterministically.

#![allow(dead_code)]

pub mod fetchers;

use swipedeck_domain::{Profile, ProfileId};

/// Profiles with only their ids set, in the given (bottom-to-top) order.
pub fn profiles(ids: &[ProfileId]) -> Vec<Profile> {
    ids.iter().map(|&id| Profile::new(id).with_name(format!("user-{id}"))).collect()
}

/// Ids of a profile slice, bottom first.
pub fn ids(profiles: &[Profile]) -> Vec<ProfileId> {
    profiles.iter().map(|p| p.id).collect()
}
