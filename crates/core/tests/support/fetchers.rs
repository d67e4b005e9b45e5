//! Fetch doubles for the `ProfileFetcher` port.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use swipedeck_core::ProfileFetcher;
use swipedeck_domain::{FetchError, Profile};
use tokio::sync::oneshot;

type FetchResult = Result<Vec<Profile>, FetchError>;

/// Returns scripted responses in call order; repeats the last one forever.
pub struct ScriptedFetcher {
    responses: Mutex<Vec<FetchResult>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<FetchResult>) -> Self {
        Self { responses: Mutex::new(responses), calls: AtomicUsize::new(0) }
    }

    pub fn always(profiles: Vec<Profile>) -> Self {
        Self::new(vec![Ok(profiles)])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileFetcher for ScriptedFetcher {
    async fn fetch(&self) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.responses.lock().expect("responses mutex poisoned");
        if responses.len() > 1 {
            responses.remove(0)
        } else {
            responses
                .first()
                .cloned()
                .unwrap_or_else(|| Err(FetchError::Transport("no scripted response".into())))
        }
    }
}

/// Each call `n` blocks until gate `n` is released, then returns response `n`.
pub struct GatedFetcher {
    slots: Mutex<Vec<Option<(oneshot::Receiver<()>, FetchResult)>>>,
    calls: AtomicUsize,
}

impl GatedFetcher {
    /// Build the fetcher and the gates that release each call.
    pub fn new(responses: Vec<FetchResult>) -> (Self, Vec<oneshot::Sender<()>>) {
        let mut gates = Vec::with_capacity(responses.len());
        let slots = responses
            .into_iter()
            .map(|response| {
                let (tx, rx) = oneshot::channel();
                gates.push(tx);
                Some((rx, response))
            })
            .collect();
        (Self { slots: Mutex::new(slots), calls: AtomicUsize::new(0) }, gates)
    }
}

#[async_trait]
impl ProfileFetcher for GatedFetcher {
    async fn fetch(&self) -> FetchResult {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        let slot = {
            let mut slots = self.slots.lock().expect("slots mutex poisoned");
            slots.get_mut(index).and_then(Option::take)
        };
        let Some((gate, response)) = slot else {
            return Err(FetchError::Transport(format!("unexpected fetch call #{index}")));
        };
        // A dropped sender releases the call as well.
        let _ = gate.await;
        response
    }
}
