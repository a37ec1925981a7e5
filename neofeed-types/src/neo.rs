//! The near-earth object entity.
//!
//! A `Neo` is what clients render and edit. Identity is the `name`; every
//! other field is an attribute that may change between writes of the same
//! logical record.

use crate::NeoName;
use serde::{Deserialize, Serialize};

/// A near-earth object as shown to users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neo {
    /// NASA reference id.
    pub id: String,
    /// Designation, e.g. `"(2018 PV24)"`. This is the identity.
    pub name: NeoName,
    /// User-assigned nickname. Empty until edited.
    #[serde(default)]
    pub nickname: String,
    /// Maximum estimated diameter in miles.
    pub estimated_diameter: f64,
    /// Whether NASA flags the object as potentially hazardous.
    pub hazardous: bool,
}

impl Neo {
    /// Creates a new entity with an empty nickname.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<NeoName>,
        estimated_diameter: f64,
        hazardous: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nickname: String::new(),
            estimated_diameter,
            hazardous,
        }
    }

    /// Returns a copy of this entity with the nickname replaced.
    ///
    /// This is the single-field edit clients submit as an update candidate.
    #[must_use]
    pub fn with_nickname(&self, nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            ..self.clone()
        }
    }

    /// Returns true if `other` is the same logical record.
    pub fn same_identity(&self, other: &Neo) -> bool {
        self.name == other.name
    }
}
