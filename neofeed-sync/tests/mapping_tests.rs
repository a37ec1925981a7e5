use neofeed_sync::mapping::map_feed;
use neofeed_sync::{NeoWsMapper, ResponseMapper, SyncError};
use neofeed_types::Neo;
use neofeed_types::payload::{DiameterRange, EstimatedDiameter, FeedResponse, RawNeo};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn raw_neo(id: &str, name: &str, max_miles: f64, hazardous: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "neo_reference_id": id,
        "name": name,
        "estimated_diameter": {
            "kilometers": {"estimated_diameter_min": 0.01, "estimated_diameter_max": max_miles * 1.6},
            "miles": {"estimated_diameter_min": 0.01, "estimated_diameter_max": max_miles}
        },
        "is_potentially_hazardous_asteroid": hazardous,
        "close_approach_data": []
    })
}

fn sample_feed() -> serde_json::Value {
    serde_json::json!({
        "links": {"self": "https://api.nasa.gov/neo/rest/v1/feed"},
        "element_count": 3,
        "near_earth_objects": {
            "2018-09-02": [raw_neo("3", "(2018 QN1)", 0.3, true)],
            "2018-09-01": [
                raw_neo("1", "(2018 PV24)", 0.1, false),
                raw_neo("2", "(2018 RC)", 0.2, false)
            ]
        }
    })
}

#[test]
fn maps_sample_feed_in_date_order() {
    let neos = NeoWsMapper.map_response(&sample_feed()).unwrap();
    assert_eq!(
        neos,
        vec![
            Neo::new("1", "(2018 PV24)", 0.1, false),
            Neo::new("2", "(2018 RC)", 0.2, false),
            Neo::new("3", "(2018 QN1)", 0.3, true),
        ]
    );
}

#[test]
fn mapped_neos_have_empty_nicknames() {
    let neos = NeoWsMapper.map_response(&sample_feed()).unwrap();
    assert!(neos.iter().all(|n| n.nickname.is_empty()));
}

#[test]
fn empty_feed_maps_to_empty_list() {
    let raw = serde_json::json!({"element_count": 0, "near_earth_objects": {}});
    assert!(NeoWsMapper.map_response(&raw).unwrap().is_empty());
}

#[test]
fn missing_object_map_is_a_mapping_error() {
    let raw = serde_json::json!({"element_count": 0});
    let err = NeoWsMapper.map_response(&raw).unwrap_err();
    assert!(matches!(err, SyncError::Mapping(_)));
    assert!(err.to_string().contains("near_earth_objects"));
}

#[test]
fn malformed_object_is_a_mapping_error() {
    let raw = serde_json::json!({
        "near_earth_objects": {"2018-09-01": [{"id": "1", "name": "(2018 PV24)"}]}
    });
    assert!(matches!(
        NeoWsMapper.map_response(&raw),
        Err(SyncError::Mapping(_))
    ));
}

#[test]
fn non_object_body_is_a_mapping_error() {
    let raw = serde_json::json!(["not", "a", "feed"]);
    assert!(NeoWsMapper.map_response(&raw).is_err());
}

fn raw_strategy() -> impl Strategy<Value = RawNeo> {
    ("[0-9]{1,7}", "\\([0-9]{4} [A-Z]{2}[0-9]{0,2}\\)", 0.0f64..10.0, any::<bool>()).prop_map(
        |(id, name, max, hazardous)| RawNeo {
            id,
            name,
            estimated_diameter: EstimatedDiameter {
                miles: DiameterRange {
                    estimated_diameter_min: max / 2.0,
                    estimated_diameter_max: max,
                },
            },
            is_potentially_hazardous_asteroid: hazardous,
        },
    )
}

proptest! {
    #[test]
    fn map_feed_keeps_every_object(
        days in prop::collection::btree_map("2018-09-[0-2][0-9]", prop::collection::vec(raw_strategy(), 0..5), 0..4)
    ) {
        let total: usize = days.values().map(Vec::len).sum();
        let expected: Vec<String> = days.values().flatten().map(|r| r.name.clone()).collect();
        let response = FeedResponse {
            element_count: Some(total as u64),
            near_earth_objects: days.clone(),
        };

        let neos = map_feed(response.clone());
        prop_assert_eq!(neos.len(), total);
        let names: Vec<String> = neos.iter().map(|n| n.name.to_string()).collect();
        prop_assert_eq!(names, expected);

        let via_json = NeoWsMapper.map_response(&serde_json::to_value(&response).unwrap()).unwrap();
        prop_assert_eq!(via_json.len(), neos.len());
    }
}

#[test]
fn map_feed_uses_max_diameter_in_miles() {
    let mut days = BTreeMap::new();
    days.insert(
        "2018-09-01".to_string(),
        vec![RawNeo {
            id: "1".to_string(),
            name: "(2018 PV24)".to_string(),
            estimated_diameter: EstimatedDiameter {
                miles: DiameterRange {
                    estimated_diameter_min: 0.02,
                    estimated_diameter_max: 0.07,
                },
            },
            is_potentially_hazardous_asteroid: false,
        }],
    );
    let neos = map_feed(FeedResponse {
        element_count: None,
        near_earth_objects: days,
    });
    assert_eq!(neos[0].estimated_diameter, 0.07);
}
