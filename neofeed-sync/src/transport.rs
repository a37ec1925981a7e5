//! Transport layer abstraction.
//!
//! The service performs exactly one kind of outbound call: a read of the
//! feed for a date range. Implementations return the raw JSON body and
//! leave decoding to the mapping step.

use crate::error::SyncResult;
use async_trait::async_trait;
use neofeed_types::FeedQuery;

/// A transport that can read the NeoWs feed.
#[async_trait]
pub trait FeedTransport: Send + Sync {
    /// Returns a short name for logs.
    fn name(&self) -> &'static str;

    /// Reads the feed for `query` and returns the raw body.
    async fn fetch_feed(&self, query: &FeedQuery) -> SyncResult<serde_json::Value>;
}

/// A mock transport for testing.
pub mod mock {
    use super::*;
    use crate::error::SyncError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Mutex, PoisonError};

    /// What the mock answers with.
    #[derive(Debug, Clone)]
    enum Reply {
        Body(serde_json::Value),
        Network(String),
        Status { status: u16, message: String },
    }

    /// A transport returning a canned reply and recording each query.
    #[derive(Debug)]
    pub struct MockFeedTransport {
        reply: Mutex<Reply>,
        queries: Mutex<Vec<FeedQuery>>,
        calls: AtomicUsize,
    }

    impl MockFeedTransport {
        /// Answers every read with `body`.
        pub fn with_body(body: serde_json::Value) -> Self {
            Self::new(Reply::Body(body))
        }

        /// Fails every read with a network error.
        pub fn failing(detail: impl Into<String>) -> Self {
            Self::new(Reply::Network(detail.into()))
        }

        /// Fails every read with an HTTP status.
        pub fn with_status(status: u16, message: impl Into<String>) -> Self {
            Self::new(Reply::Status {
                status,
                message: message.into(),
            })
        }

        fn new(reply: Reply) -> Self {
            Self {
                reply: Mutex::new(reply),
                queries: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
            }
        }

        /// Replaces the reply body for subsequent reads.
        pub fn set_body(&self, body: serde_json::Value) {
            *self.reply.lock().unwrap_or_else(PoisonError::into_inner) = Reply::Body(body);
        }

        /// Number of reads performed so far.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Queries received, oldest first.
        pub fn queries(&self) -> Vec<FeedQuery> {
            self.queries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    #[async_trait]
    impl FeedTransport for MockFeedTransport {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn fetch_feed(&self, query: &FeedQuery) -> SyncResult<serde_json::Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.queries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(*query);

            let reply = self
                .reply
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone();
            match reply {
                Reply::Body(body) => Ok(body),
                Reply::Network(detail) => Err(SyncError::Network(detail)),
                Reply::Status { status, message } => Err(SyncError::Status { status, message }),
            }
        }
    }
}
