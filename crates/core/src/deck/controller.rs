//! Deck controller - mailbox loop that serializes all deck mutations
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use swipedeck_core::deck::DeckController;
//! use swipedeck_core::ProfileFetcher;
//! use swipedeck_domain::GestureConfig;
//!
//! # async fn example(fetcher: Arc<dyn ProfileFetcher>) -> swipedeck_domain::Result<()> {
//! let (deck, _task) = DeckController::spawn(fetcher, GestureConfig::default());
//! deck.load()?;
//! let ready = deck.wait_for_view(|view| view.phase.is_settled()).await?;
//! if let Some(top) = ready.top() {
//!     deck.drag_start(top.profile_id)?;
//!     deck.drag_changed(180.0, 4.0)?;
//!     deck.drag_ended()?;
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use swipedeck_domain::{
    FetchError, GestureConfig, Profile, ProfileId, Result, SwipeDeckError, Translation,
};
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::view::{DeckPhase, DeckView};
use crate::engine::{CardStackEngine, DeckEvent, DragOutcome};
use crate::store::{LoadTicket, ProfileFetcher, ProfileStore, StoreSnapshot};

/// Messages accepted by the controller task
#[derive(Debug)]
enum Command {
    Load,
    Remove(ProfileId),
    DragStart(ProfileId),
    DragChanged(Translation),
    DragEnded,
    Tap(ProfileId),
    FetchCompleted { ticket: LoadTicket, result: std::result::Result<Vec<Profile>, FetchError> },
    Shutdown,
}

/// Owner of the store and engine.
///
/// Runs as a single tokio task; see [`DeckController::spawn`].
pub struct DeckController {
    store: ProfileStore,
    engine: CardStackEngine,
    fetcher: Arc<dyn ProfileFetcher>,
    inbox: mpsc::UnboundedReceiver<Command>,
    loopback: mpsc::WeakUnboundedSender<Command>,
    view: watch::Sender<DeckView>,
    revision: u64,
}

impl DeckController {
    /// Start the controller task.
    ///
    /// The task ends after [`DeckHandle::shutdown`], or once every handle is
    /// dropped and no fetch is still in flight.
    pub fn spawn(
        fetcher: Arc<dyn ProfileFetcher>,
        config: GestureConfig,
    ) -> (DeckHandle, JoinHandle<()>) {
        let (commands, inbox) = mpsc::unbounded_channel();
        let store = ProfileStore::new();
        let engine = CardStackEngine::new(config);
        let (view, view_rx) = watch::channel(DeckView::default());

        let handle = DeckHandle {
            commands: commands.clone(),
            view: view_rx,
            store: store.subscribe(),
            events: engine.event_sender(),
        };

        let controller = Self {
            store,
            engine,
            fetcher,
            inbox,
            loopback: commands.downgrade(),
            view,
            revision: 0,
        };
        let task = tokio::spawn(controller.run());

        (handle, task)
    }

    async fn run(mut self) {
        info!("deck controller started");
        while let Some(command) = self.inbox.recv().await {
            if matches!(command, Command::Shutdown) {
                break;
            }
            self.handle(command);
            self.publish();
        }
        info!("deck controller stopped");
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Load => self.start_load(),
            Command::FetchCompleted { ticket, result } => self.store.complete_load(ticket, result),
            Command::Remove(id) => {
                self.store.remove(id);
            }
            Command::DragStart(id) => {
                self.engine.on_drag_start(self.store.profiles(), id);
            }
            Command::DragChanged(translation) => {
                self.engine.on_drag_change(translation);
            }
            Command::DragEnded => {
                if let Some(DragOutcome::Swiped { id, liked, forced, .. }) =
                    self.engine.on_drag_end(self.store.profiles())
                {
                    debug!(id, liked, forced, "removing swiped profile");
                    self.store.remove(id);
                }
            }
            Command::Tap(id) => {
                self.engine.on_tap(self.store.profiles(), id);
            }
            Command::Shutdown => {}
        }
    }

    fn start_load(&mut self) {
        let Some(reply) = self.loopback.upgrade() else {
            warn!("no handle left to deliver fetch result; skipping load");
            return;
        };
        let ticket = self.store.begin_load();
        let fetcher = Arc::clone(&self.fetcher);

        tokio::spawn(async move {
            let result = fetcher.fetch().await;
            if reply.send(Command::FetchCompleted { ticket, result }).is_err() {
                debug!(ticket = ticket.value(), "controller stopped before fetch completed");
            }
        });
    }

    fn publish(&mut self) {
        self.revision += 1;
        let profiles = self.store.profiles();
        let load_state = self.store.load_state();
        let view = DeckView {
            phase: DeckPhase::derive(load_state, !profiles.is_empty()),
            cards: self.engine.render(profiles),
            load_error: load_state.error_message(),
            revision: self.revision,
        };
        self.view.send_replace(view);
    }
}

/// Cloneable front door to a running [`DeckController`]
#[derive(Clone)]
pub struct DeckHandle {
    commands: mpsc::UnboundedSender<Command>,
    view: watch::Receiver<DeckView>,
    store: watch::Receiver<StoreSnapshot>,
    events: broadcast::Sender<DeckEvent>,
}

impl DeckHandle {
    /// Request a (re)fetch of the profile list
    pub fn load(&self) -> Result<()> {
        self.send(Command::Load)
    }

    /// Remove a profile by id; absent ids are ignored
    pub fn remove(&self, id: ProfileId) -> Result<()> {
        self.send(Command::Remove(id))
    }

    pub fn drag_start(&self, id: ProfileId) -> Result<()> {
        self.send(Command::DragStart(id))
    }

    pub fn drag_changed(&self, dx: f64, dy: f64) -> Result<()> {
        self.send(Command::DragChanged(Translation::new(dx, dy)))
    }

    pub fn drag_ended(&self) -> Result<()> {
        self.send(Command::DragEnded)
    }

    pub fn tap(&self, id: ProfileId) -> Result<()> {
        self.send(Command::Tap(id))
    }

    /// Stop the controller after already queued commands
    pub fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown)
    }

    /// Latest published render snapshot
    pub fn view(&self) -> DeckView {
        self.view.borrow().clone()
    }

    pub fn subscribe_view(&self) -> watch::Receiver<DeckView> {
        self.view.clone()
    }

    /// Latest store snapshot (list plus load state)
    pub fn store_snapshot(&self) -> StoreSnapshot {
        self.store.borrow().clone()
    }

    pub fn subscribe_store(&self) -> watch::Receiver<StoreSnapshot> {
        self.store.clone()
    }

    /// Removal and selection announcements
    pub fn subscribe_events(&self) -> broadcast::Receiver<DeckEvent> {
        self.events.subscribe()
    }

    /// Wait until a published view satisfies `predicate`.
    ///
    /// # Errors
    /// Returns `SwipeDeckError::Internal` if the controller stops first.
    pub async fn wait_for_view(&self, predicate: impl FnMut(&DeckView) -> bool) -> Result<DeckView> {
        let mut rx = self.view.clone();
        let view = rx.wait_for(predicate).await.map_err(|_| controller_stopped())?;
        Ok(view.clone())
    }

    fn send(&self, command: Command) -> Result<()> {
        self.commands.send(command).map_err(|_| controller_stopped())
    }
}

fn controller_stopped() -> SwipeDeckError {
    SwipeDeckError::Internal("deck controller is not running".into())
}
