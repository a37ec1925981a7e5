//! Deferred optimistic updates.
//!
//! An [`UpdateTask`] is a description of an update. Starting it writes the
//! entity into the store right away and schedules the simulated remote
//! confirmation; each start does both again.

use crate::error::{SyncError, SyncResult};
use crate::service::normalize_error;
use crate::state::StateStore;
use futures::future::{BoxFuture, FutureExt};
use neofeed_types::Neo;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// The remote always refuses updates to this object.
pub const REJECTED_NEO_NAME: &str = "(2018 PV24)";

/// An update that has been built but not started.
#[derive(Clone)]
pub struct UpdateTask {
    neo: Neo,
    store: Arc<dyn StateStore>,
    delay: Duration,
}

impl UpdateTask {
    pub(crate) fn new(neo: Neo, store: Arc<dyn StateStore>, delay: Duration) -> Self {
        Self { neo, store, delay }
    }

    /// The candidate entity.
    pub fn neo(&self) -> &Neo {
        &self.neo
    }

    /// Simulated round-trip time.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs the update.
    ///
    /// The optimistic write happens before this returns. The simulated
    /// confirmation runs as a background task on the current tokio runtime
    /// and always fires once started, whether or not the returned handle is
    /// awaited; a rejection is normalized into the store but the optimistic
    /// write is kept.
    ///
    /// Outside a runtime the confirmation cannot be scheduled. The failure
    /// is recorded in the store and the returned handle resolves to
    /// [`SyncError::Runtime`].
    pub fn start(&self) -> PendingUpdate {
        debug!(name = %self.neo.name, "Applying optimistic update");
        self.store.update_neo(self.neo.clone());

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!(name = %self.neo.name, "No runtime to confirm update");
                let err = normalize_error(
                    self.store.as_ref(),
                    SyncError::Runtime(format!("cannot schedule confirmation: {e}")),
                );
                return PendingUpdate {
                    state: PendingState::Unscheduled(Some(err)),
                };
            }
        };

        let store = Arc::clone(&self.store);
        let neo = self.neo.clone();
        let deadline = Instant::now() + self.delay;
        let handle = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            confirm(neo).map_err(|e| normalize_error(store.as_ref(), e))
        });

        PendingUpdate {
            state: PendingState::Spawned {
                handle,
                store: Arc::clone(&self.store),
            },
        }
    }
}

impl IntoFuture for UpdateTask {
    type Output = SyncResult<Neo>;
    type IntoFuture = BoxFuture<'static, SyncResult<Neo>>;

    /// Starts the task on first poll.
    fn into_future(self) -> Self::IntoFuture {
        async move { self.start().await }.boxed()
    }
}

impl std::fmt::Debug for UpdateTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateTask")
            .field("neo", &self.neo)
            .field("delay", &self.delay)
            .finish()
    }
}

/// Handle to a started update.
///
/// Resolves with the outcome of the confirmation. Dropping it only discards
/// that outcome; the confirmation still fires.
pub struct PendingUpdate {
    state: PendingState,
}

enum PendingState {
    Spawned {
        handle: JoinHandle<SyncResult<Neo>>,
        store: Arc<dyn StateStore>,
    },
    Unscheduled(Option<SyncError>),
}

impl Future for PendingUpdate {
    type Output = SyncResult<Neo>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.state {
            PendingState::Spawned { handle, store } => match Pin::new(handle).poll(cx) {
                Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
                Poll::Ready(Err(e)) => Poll::Ready(Err(normalize_error(
                    store.as_ref(),
                    SyncError::Runtime(format!("update task failed: {e}")),
                ))),
                Poll::Pending => Poll::Pending,
            },
            PendingState::Unscheduled(err) => {
                Poll::Ready(Err(err.take().unwrap_or(SyncError::Unknown)))
            }
        }
    }
}

impl std::fmt::Debug for PendingUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            PendingState::Spawned { handle, .. } if handle.is_finished() => "finished",
            PendingState::Spawned { .. } => "running",
            PendingState::Unscheduled(_) => "unscheduled",
        };
        f.debug_struct("PendingUpdate").field("state", &state).finish()
    }
}

/// Simulated remote confirmation.
fn confirm(neo: Neo) -> SyncResult<Neo> {
    if neo.name == REJECTED_NEO_NAME {
        return Err(SyncError::Rejected {
            name: neo.name.into_inner(),
        });
    }
    info!(name = %neo.name, "Update confirmed");
    Ok(neo)
}
