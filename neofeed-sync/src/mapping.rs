//! Response mapping.
//!
//! Turns the raw NeoWs feed body into the entity list clients render.

use crate::error::{SyncError, SyncResult};
use neofeed_types::Neo;
use neofeed_types::payload::{FeedResponse, RawNeo};
use serde::Deserialize;

/// Decodes a raw feed body into entities. Must be pure.
pub trait ResponseMapper: Send + Sync {
    fn map_response(&self, raw: &serde_json::Value) -> SyncResult<Vec<Neo>>;
}

/// Mapper for the NeoWs `feed` payload.
///
/// Dates are visited in ascending order and objects keep their order within
/// a date.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeoWsMapper;

impl ResponseMapper for NeoWsMapper {
    fn map_response(&self, raw: &serde_json::Value) -> SyncResult<Vec<Neo>> {
        let response = FeedResponse::deserialize(raw)
            .map_err(|e| SyncError::Mapping(format!("unexpected feed payload: {e}")))?;
        Ok(map_feed(response))
    }
}

/// Flattens a decoded feed into entities.
pub fn map_feed(response: FeedResponse) -> Vec<Neo> {
    response
        .near_earth_objects
        .into_values()
        .flatten()
        .map(map_neo)
        .collect()
}

fn map_neo(raw: RawNeo) -> Neo {
    Neo::new(
        raw.id,
        raw.name,
        raw.estimated_diameter.miles.estimated_diameter_max,
        raw.is_potentially_hazardous_asteroid,
    )
}
