//! Navigation events.
//!
//! A presentation layer reports route changes here. The service registers a
//! listener at construction so that a completed navigation clears any stale
//! error.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tracing::trace;

/// A route change reported by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Navigation to `url` began.
    Start { url: String },
    /// Navigation to `url` completed.
    End { url: String },
}

impl NavigationEvent {
    pub fn is_end(&self) -> bool {
        matches!(self, NavigationEvent::End { .. })
    }

    pub fn url(&self) -> &str {
        match self {
            NavigationEvent::Start { url } | NavigationEvent::End { url } => url,
        }
    }
}

/// Callback invoked for every navigation event.
pub type Listener = Arc<dyn Fn(&NavigationEvent) + Send + Sync>;

/// Source of navigation events.
pub trait NavigationSource: Send + Sync {
    /// Registers `listener`. It stays registered until the returned
    /// `Subscription` is cancelled or dropped.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

/// Handle to a registered listener.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Wraps a function that unregisters the listener.
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to release.
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Unregisters the listener now.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

type Registry = Mutex<Vec<(u64, Listener)>>;

/// In-process navigation event bus.
///
/// Listeners run synchronously on the emitting task, in registration order.
#[derive(Default)]
pub struct Navigator {
    listeners: Arc<Registry>,
    next_id: AtomicU64,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every registered listener.
    pub fn emit(&self, event: &NavigationEvent) {
        trace!(url = event.url(), end = event.is_end(), "Navigation event");
        // Snapshot so listeners may subscribe or cancel while running.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    /// Emits `Start` then `End` for `url`.
    pub fn navigate(&self, url: impl Into<String>) {
        let url = url.into();
        self.emit(&NavigationEvent::Start { url: url.clone() });
        self.emit(&NavigationEvent::End { url });
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl NavigationSource for Navigator {
    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, listener));

        let registry: Weak<Registry> = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .retain(|(existing, _)| *existing != id);
            }
        })
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
