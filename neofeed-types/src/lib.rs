//! Core type definitions for neofeed.
//!
//! This crate defines the plain data types shared by the sync layer and
//! its front ends:
//! - `NeoName`, the identity of a near-earth object
//! - `Neo`, the entity rendered and optimistically updated by clients
//! - `FeedQuery`, the date range sent to the NeoWs feed endpoint
//! - the raw NeoWs payload shapes the mapping step decodes
//!
//! Nothing here performs I/O.

mod ids;
mod neo;
pub mod payload;
mod query;

pub use ids::NeoName;
pub use neo::Neo;
pub use query::{FEED_DATE_FORMAT, FeedQuery};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}
