//! Optimistic sync layer for the NASA NeoWs feed.
//!
//! Fetches the list of near-earth objects for a date range, publishes it to
//! a shared state store, and applies single-field edits optimistically
//! before a (simulated) remote round trip confirms or rejects them.
//!
//! # Architecture
//!
//! - **State**: `NeoStore` holds the entity list, the loading flag and the
//!   current error, and broadcasts every change over a `watch` channel
//! - **Transport**: `FeedTransport` abstracts the single outbound read;
//!   `HttpFeedTransport` is the reqwest implementation
//! - **Mapping**: `ResponseMapper` turns the raw payload into `Neo` records
//! - **Navigation**: `Navigator` emits route events; completed navigations
//!   dismiss the current error
//! - **Service**: `NeoFeedService` wires the above together and exposes
//!   `init` and `update`
//!
//! ## Failure handling
//!
//! Every failure passes through one normalization step that records a
//! dismissible error in the store before the error is returned to the
//! caller. Optimistic writes are never rolled back.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use neofeed_sync::{FeedConfig, Navigator, NeoFeedService, NeoStore};
//! use neofeed_types::FeedQuery;
//!
//! # async fn run() -> neofeed_sync::SyncResult<()> {
//! let store = Arc::new(NeoStore::new());
//! let navigator = Navigator::new();
//! let service = NeoFeedService::with_http(FeedConfig::default(), store.clone(), &navigator)?;
//!
//! let neos = service.init(FeedQuery::today()).await?;
//! if let Some(first) = neos.first() {
//!     service.update(first.with_nickname("Rocky")).await?;
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
pub mod http;
pub mod mapping;
pub mod navigation;
mod service;
pub mod state;
pub mod transport;
mod update;

pub use config::FeedConfig;
pub use error::{GENERIC_ERROR_MESSAGE, SyncError, SyncResult};
pub use http::HttpFeedTransport;
pub use mapping::{NeoWsMapper, ResponseMapper};
pub use navigation::{Listener, NavigationEvent, NavigationSource, Navigator, Subscription};
pub use service::{NeoFeedService, normalize_error};
pub use state::{ErrorState, FeedState, NeoStore, StateStore};
pub use transport::FeedTransport;
pub use update::{PendingUpdate, REJECTED_NEO_NAME, UpdateTask};
