//! Identifier types for near-earth objects.
//!
//! The NeoWs feed names every object with a designation such as
//! `"(2018 PV24)"`. That designation is the identity used for
//! update-in-place; the numeric NASA id is carried along as plain data.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Identity of a near-earth object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeoName(String);

impl NeoName {
    /// Creates a name from any string-like value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the designation as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NeoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for NeoName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for NeoName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NeoName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for NeoName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NeoName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NeoName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NeoName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
