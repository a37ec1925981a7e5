//! Shared state store.
//!
//! Holds the entity list, the loading flag and the current error. The store
//! is the only owner of the list; operations write into it and observers
//! read snapshots or subscribe to changes.

use neofeed_types::Neo;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

/// A user-visible error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorState {
    pub message: String,
    pub dismissible: bool,
}

/// Everything a presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedState {
    /// Entity list in feed order.
    pub neos: Vec<Neo>,
    /// True until the first feed load completes (successfully or not).
    pub loading: bool,
    /// At most one active error.
    pub error: Option<ErrorState>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            neos: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl FeedState {
    /// Looks up an entity by identity.
    pub fn neo(&self, name: &str) -> Option<&Neo> {
        self.neos.iter().find(|n| n.name == name)
    }
}

/// Write contract the service needs from a state holder.
///
/// Writes are synchronous and unconditional; the last writer wins.
pub trait StateStore: Send + Sync {
    /// Replaces the whole entity list.
    fn set_neo_list(&self, neos: Vec<Neo>);

    /// Writes one entity at its identity position, appending it if the
    /// identity is not in the list yet.
    fn update_neo(&self, neo: Neo);

    /// Records the active error, replacing any previous one.
    fn set_error(&self, message: String, dismissible: bool);

    /// Clears the active error, if any.
    fn dismiss_error(&self);

    /// Clears the loading flag. It is never set back to true.
    fn finish_loading(&self);
}

/// In-memory store that publishes every change on a `watch` channel.
#[derive(Debug)]
pub struct NeoStore {
    tx: watch::Sender<FeedState>,
}

impl NeoStore {
    /// Creates an empty store in the loading state.
    pub fn new() -> Self {
        Self::with_state(FeedState::default())
    }

    /// Creates a store seeded with `state`.
    pub fn with_state(state: FeedState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx }
    }

    /// Subscribes to state changes. The receiver sees the current value
    /// immediately and is notified after every write.
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.tx.subscribe()
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> FeedState {
        self.tx.borrow().clone()
    }

    /// Returns a copy of the current entity list.
    pub fn neos(&self) -> Vec<Neo> {
        self.tx.borrow().neos.clone()
    }

    /// Returns the entity with the given identity.
    pub fn neo(&self, name: &str) -> Option<Neo> {
        self.tx.borrow().neo(name).cloned()
    }

    /// Returns the active error.
    pub fn error(&self) -> Option<ErrorState> {
        self.tx.borrow().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.tx.borrow().loading
    }
}

impl Default for NeoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for NeoStore {
    fn set_neo_list(&self, neos: Vec<Neo>) {
        debug!(count = neos.len(), "Publishing entity list");
        self.tx.send_modify(|state| state.neos = neos);
    }

    fn update_neo(&self, neo: Neo) {
        debug!(name = %neo.name, "Writing entity");
        self.tx.send_modify(|state| upsert(&mut state.neos, neo));
    }

    fn set_error(&self, message: String, dismissible: bool) {
        self.tx.send_modify(|state| {
            state.error = Some(ErrorState {
                message,
                dismissible,
            });
        });
    }

    fn dismiss_error(&self) {
        self.tx.send_modify(|state| state.error = None);
    }

    fn finish_loading(&self) {
        self.tx.send_modify(|state| state.loading = false);
    }
}

fn upsert(neos: &mut Vec<Neo>, neo: Neo) {
    match neos.iter().position(|n| n.same_identity(&neo)) {
        Some(idx) => neos[idx] = neo,
        None => neos.push(neo),
    }
}
