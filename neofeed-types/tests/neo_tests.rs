use neofeed_types::payload::FeedResponse;
use neofeed_types::{Neo, NeoName};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

// ── NeoName ──────────────────────────────────────────────────────

#[test]
fn neo_name_display_matches_designation() {
    let name = NeoName::new("(2018 PV24)");
    assert_eq!(name.to_string(), "(2018 PV24)");
    assert_eq!(name.as_str(), "(2018 PV24)");
}

#[test]
fn neo_name_compares_with_str() {
    let name = NeoName::from("(2018 PV24)");
    assert!(name == "(2018 PV24)");
    assert!(name != "(2018 PV25)");
}

#[test]
fn neo_name_from_str() {
    let name: NeoName = "433 Eros (A898 PA)".parse().unwrap();
    assert_eq!(name.into_inner(), "433 Eros (A898 PA)");
}

#[test]
fn neo_name_hash_and_eq() {
    let mut set = HashSet::new();
    set.insert(NeoName::new("a"));
    set.insert(NeoName::new("a"));
    set.insert(NeoName::new("b"));
    assert_eq!(set.len(), 2);
}

#[test]
fn neo_name_serializes_as_plain_string() {
    let json = serde_json::to_string(&NeoName::new("(2018 PV24)")).unwrap();
    assert_eq!(json, r#""(2018 PV24)""#);
}

// ── Neo ──────────────────────────────────────────────────────────

#[test]
fn neo_new_starts_without_nickname() {
    let neo = Neo::new("3826606", "(2018 PV24)", 0.07, false);
    assert!(neo.nickname.is_empty());
    assert_eq!(neo.name, "(2018 PV24)");
}

#[test]
fn with_nickname_changes_only_the_nickname() {
    let neo = Neo::new("3826606", "(2018 PV24)", 0.07, true);
    let edited = neo.with_nickname("Pebble");

    assert_eq!(edited.nickname, "Pebble");
    assert_eq!(edited.id, neo.id);
    assert_eq!(edited.name, neo.name);
    assert_eq!(edited.estimated_diameter, neo.estimated_diameter);
    assert_eq!(edited.hazardous, neo.hazardous);
    assert!(neo.nickname.is_empty());
}

#[test]
fn same_identity_ignores_attributes() {
    let a = Neo::new("1", "(2018 PV24)", 0.1, false);
    let b = a.with_nickname("Other");
    let c = Neo::new("1", "(2018 QA1)", 0.1, false);

    assert!(a.same_identity(&b));
    assert!(!a.same_identity(&c));
}

#[test]
fn neo_deserializes_without_nickname() {
    let json = r#"{"id":"1","name":"(2018 PV24)","estimated_diameter":0.5,"hazardous":true}"#;
    let neo: Neo = serde_json::from_str(json).unwrap();
    assert_eq!(neo.nickname, "");
    assert!(neo.hazardous);
}

// ── Raw payload ──────────────────────────────────────────────────

#[test]
fn feed_response_ignores_unknown_fields() {
    let raw = serde_json::json!({
        "links": {"self": "http://example"},
        "element_count": 1,
        "near_earth_objects": {
            "2018-09-01": [{
                "id": "3826606",
                "neo_reference_id": "3826606",
                "name": "(2018 PV24)",
                "estimated_diameter": {
                    "kilometers": {"estimated_diameter_min": 0.1, "estimated_diameter_max": 0.2},
                    "miles": {"estimated_diameter_min": 0.06, "estimated_diameter_max": 0.13}
                },
                "is_potentially_hazardous_asteroid": false,
                "close_approach_data": []
            }]
        }
    });

    let parsed: FeedResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.element_count, Some(1));
    let day = &parsed.near_earth_objects["2018-09-01"];
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].estimated_diameter.miles.estimated_diameter_max, 0.13);
}

#[test]
fn feed_response_requires_object_map() {
    let raw = serde_json::json!({"element_count": 0});
    assert!(serde_json::from_value::<FeedResponse>(raw).is_err());
}
