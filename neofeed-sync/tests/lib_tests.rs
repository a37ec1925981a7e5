use neofeed_sync::{FeedConfig, Navigator, NeoFeedService, NeoStore, REJECTED_NEO_NAME};
use std::sync::Arc;

#[test]
fn service_creation() {
    let navigator = Navigator::new();
    let service =
        NeoFeedService::with_http(FeedConfig::default(), Arc::new(NeoStore::new()), &navigator)
            .unwrap();

    assert_eq!(service.config(), &FeedConfig::default());
    assert!(format!("{service:?}").contains("http"));
}

#[test]
fn rejected_name() {
    assert_eq!(REJECTED_NEO_NAME, "(2018 PV24)");
}
