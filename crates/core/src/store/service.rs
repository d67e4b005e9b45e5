//! Profile store - owns the ordered profile list and its load state

use std::collections::HashSet;

use serde::Serialize;
use swipedeck_domain::{FetchError, LoadState, Profile, ProfileId};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::ports::ProfileFetcher;

/// Identifies one `begin_load` / `complete_load` pair.
///
/// Tickets only label log lines; they do not gate installation, so the last
/// response to complete always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Consistent view of the store published to subscribers.
///
/// The list and the load state always come from the same mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreSnapshot {
    pub profiles: Vec<Profile>,
    pub load_state: LoadState,
    /// Incremented on every published change
    pub revision: u64,
}

impl StoreSnapshot {
    /// Top of the stack (last element)
    pub fn top(&self) -> Option<&Profile> {
        self.profiles.last()
    }
}

/// Owner of the profile list.
///
/// All mutation goes through `&mut self`, so a single owner serializes
/// writes. Observers receive snapshots over a watch channel.
pub struct ProfileStore {
    profiles: Vec<Profile>,
    load_state: LoadState,
    revision: u64,
    next_ticket: u64,
    publisher: watch::Sender<StoreSnapshot>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Create an empty store in the `Idle` state
    pub fn new() -> Self {
        let (publisher, _) = watch::channel(StoreSnapshot::default());
        Self {
            profiles: Vec::new(),
            load_state: LoadState::Idle,
            revision: 0,
            next_ticket: 0,
            publisher,
        }
    }

    /// Subscribe to published snapshots
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.publisher.subscribe()
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            profiles: self.profiles.clone(),
            load_state: self.load_state.clone(),
            revision: self.revision,
        }
    }

    /// Borrow the ordered list (bottom first, top last)
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn top(&self) -> Option<&Profile> {
        self.profiles.last()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Enter `Loading` and hand out a ticket for the matching completion.
    ///
    /// Callable from any state; in-flight loads are not cancelled.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        self.load_state = LoadState::Loading;
        info!(ticket = ticket.value(), "profile load started");
        self.publish();
        ticket
    }

    /// Install the outcome of a fetch.
    ///
    /// Success replaces the whole list and flips to `Loaded(None)` in one
    /// published snapshot. Failure keeps the list and records the error.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<Vec<Profile>, FetchError>) {
        if ticket.value() < self.next_ticket {
            debug!(
                ticket = ticket.value(),
                latest = self.next_ticket,
                "installing result of an earlier load request"
            );
        }

        match result {
            Ok(profiles) => {
                self.profiles = dedupe_by_id(profiles);
                self.load_state = LoadState::Loaded(None);
                info!(ticket = ticket.value(), count = self.profiles.len(), "profile load completed");
            }
            Err(err) => {
                warn!(ticket = ticket.value(), kind = err.label(), error = %err, "profile load failed");
                self.load_state = LoadState::Loaded(Some(err));
            }
        }
        self.publish();
    }

    /// Run a full load against `fetcher` on the caller's task.
    pub async fn load(&mut self, fetcher: &dyn ProfileFetcher) -> &LoadState {
        let ticket = self.begin_load();
        let result = fetcher.fetch().await;
        self.complete_load(ticket, result);
        &self.load_state
    }

    /// Remove the profile with `id`, wherever it sits in the list.
    ///
    /// Returns `None` without publishing when the id is absent.
    pub fn remove(&mut self, id: ProfileId) -> Option<Profile> {
        let Some(index) = self.profiles.iter().position(|p| p.id == id) else {
            debug!(id, "remove ignored: profile not present");
            return None;
        };
        let removed = self.profiles.remove(index);
        debug!(id, remaining = self.profiles.len(), "profile removed");
        self.publish();
        Some(removed)
    }

    fn publish(&mut self) {
        self.revision += 1;
        self.publisher.send_replace(self.snapshot());
    }
}

/// Keep the first occurrence of each id, preserving order.
fn dedupe_by_id(profiles: Vec<Profile>) -> Vec<Profile> {
    let mut seen = HashSet::with_capacity(profiles.len());
    let before = profiles.len();
    let unique: Vec<Profile> = profiles.into_iter().filter(|p| seen.insert(p.id)).collect();
    if unique.len() != before {
        warn!(dropped = before - unique.len(), "duplicate profile ids dropped from payload");
    }
    unique
}
