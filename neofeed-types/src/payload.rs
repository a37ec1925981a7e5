//! Raw NeoWs feed payload.
//!
//! Only the fields the mapping step reads are declared; serde ignores the
//! rest (`links`, `close_approach_data`, ...).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level body of `GET /neo/rest/v1/feed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub element_count: Option<u64>,
    /// Objects grouped by approach date (`YYYY-MM-DD`). A `BTreeMap` keeps
    /// the dates in ascending order.
    pub near_earth_objects: BTreeMap<String, Vec<RawNeo>>,
}

/// One object as reported by the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNeo {
    pub id: String,
    pub name: String,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
}

/// Diameter estimates in several units. Only miles are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub miles: DiameterRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}
