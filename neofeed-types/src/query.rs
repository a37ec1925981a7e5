//! Date range for a NeoWs feed request.

use crate::{Error, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format the feed endpoint expects (`YYYY-MM-DD`).
pub const FEED_DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive date range to request from the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FeedQuery {
    /// A query covering a single day.
    #[must_use]
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    /// A query covering the current UTC day.
    #[must_use]
    pub fn today() -> Self {
        Self::single_day(Utc::now().date_naive())
    }

    /// A query covering `start..=end`.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidDateRange { start, end });
        }
        Ok(Self {
            start_date: start,
            end_date: end,
        })
    }

    /// Parses a single `YYYY-MM-DD` date into a one-day query.
    pub fn parse_day(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(s.trim(), FEED_DATE_FORMAT)?;
        Ok(Self::single_day(date))
    }

    /// Query parameters for the feed endpoint, excluding the API key.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("detailed", "false".to_string()),
            ("start_date", self.start_date.format(FEED_DATE_FORMAT).to_string()),
            ("end_date", self.end_date.format(FEED_DATE_FORMAT).to_string()),
        ]
    }
}

impl fmt::Display for FeedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_date == self.end_date {
            write!(f, "{}", self.start_date.format(FEED_DATE_FORMAT))
        } else {
            write!(
                f,
                "{}..{}",
                self.start_date.format(FEED_DATE_FORMAT),
                self.end_date.format(FEED_DATE_FORMAT)
            )
        }
    }
}
