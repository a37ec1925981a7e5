//! Feed service: initial load, optimistic updates, error normalization.

use crate::config::FeedConfig;
use crate::error::{GENERIC_ERROR_MESSAGE, SyncError, SyncResult};
use crate::http::HttpFeedTransport;
use crate::mapping::{NeoWsMapper, ResponseMapper};
use crate::navigation::{NavigationEvent, NavigationSource, Subscription};
use crate::state::StateStore;
use crate::transport::FeedTransport;
use crate::update::UpdateTask;
use neofeed_types::{FeedQuery, Neo};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Records `err` as a dismissible error in `store` and returns the failure
/// to hand back to the caller.
///
/// The store is written before this returns, so state observers see the
/// error before the caller handles it. A failure without a message is
/// recorded as [`GENERIC_ERROR_MESSAGE`] and returned as
/// [`SyncError::Unknown`]; otherwise the original error is returned and
/// its `Display` text equals the recorded message.
pub fn normalize_error(store: &dyn StateStore, err: SyncError) -> SyncError {
    let (message, err) = match err.message() {
        Some(message) => (message, err),
        None => (GENERIC_ERROR_MESSAGE.to_string(), SyncError::Unknown),
    };
    warn!("Operation failed: {}", message);
    store.finish_loading();
    store.set_error(message, true);
    err
}

/// Entry point for presentation layers.
///
/// Owns the collaborators and the navigation subscription that clears
/// errors; dropping the service releases the subscription.
pub struct NeoFeedService {
    config: FeedConfig,
    store: Arc<dyn StateStore>,
    transport: Arc<dyn FeedTransport>,
    mapper: Arc<dyn ResponseMapper>,
    navigation: Subscription,
}

impl NeoFeedService {
    /// Creates a service and registers the error-dismissal listener on
    /// `navigation`.
    pub fn new(
        config: FeedConfig,
        store: Arc<dyn StateStore>,
        transport: Arc<dyn FeedTransport>,
        mapper: Arc<dyn ResponseMapper>,
        navigation: &dyn NavigationSource,
    ) -> Self {
        let dismiss_store = Arc::clone(&store);
        let navigation = navigation.subscribe(Arc::new(move |event: &NavigationEvent| {
            if event.is_end() {
                debug!(url = event.url(), "Navigation completed, dismissing error");
                dismiss_store.dismiss_error();
            }
        }));

        Self {
            config,
            store,
            transport,
            mapper,
            navigation,
        }
    }

    /// Creates a service reading the feed over HTTP with the NeoWs mapper.
    pub fn with_http(
        config: FeedConfig,
        store: Arc<dyn StateStore>,
        navigation: &dyn NavigationSource,
    ) -> SyncResult<Self> {
        let transport = HttpFeedTransport::new(&config)?;
        Ok(Self::new(
            config,
            store,
            Arc::new(transport),
            Arc::new(NeoWsMapper),
            navigation,
        ))
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn StateStore> {
        &self.store
    }

    /// Unregisters the error-dismissal listener ahead of drop.
    pub fn release_navigation(&mut self) {
        std::mem::replace(&mut self.navigation, Subscription::detached()).cancel();
    }

    /// Loads the feed for `query` and publishes it to the store.
    ///
    /// Clears the loading flag on success and on failure. Failures are
    /// normalized through [`normalize_error`].
    pub async fn init(&self, query: FeedQuery) -> SyncResult<Vec<Neo>> {
        self.load(&query).await.map_err(|e| self.on_error(e))
    }

    async fn load(&self, query: &FeedQuery) -> SyncResult<Vec<Neo>> {
        info!("Loading feed for {} via {}", query, self.transport.name());

        // The real API answers faster than the experience we want to show.
        let delay = self.config.fetch_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let raw = self.transport.fetch_feed(query).await?;
        let neos = self.mapper.map_response(&raw)?;

        self.store.set_neo_list(neos.clone());
        self.store.finish_loading();
        info!("Loaded {} near-earth objects", neos.len());
        Ok(neos)
    }

    /// Builds an optimistic update for `neo`.
    ///
    /// Nothing happens until the returned task is started or awaited.
    pub fn update(&self, neo: Neo) -> UpdateTask {
        UpdateTask::new(neo, Arc::clone(&self.store), self.config.update_delay())
    }

    /// Records `err` in the store and returns the failure for the caller.
    pub fn on_error(&self, err: SyncError) -> SyncError {
        normalize_error(self.store.as_ref(), err)
    }
}

impl std::fmt::Debug for NeoFeedService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeoFeedService")
            .field("config", &self.config)
            .field("transport", &self.transport.name())
            .field("navigation", &self.navigation)
            .finish()
    }
}
