use super::*;
use crate::net::types::{AgencyKind, AgencyRecord, CrimeRecord, PostRecord};

// =============================================================
// Helpers
// =============================================================

fn crime_item(id: &str) -> FeedItem {
    FeedItem::Crime(CrimeRecord {
        id: id.to_owned(),
        title: "Bike theft".to_owned(),
        description: "Lock cut".to_owned(),
        location: None,
        occurred_at: None,
        reporter_id: None,
        created_at: "2024-05-02T08:00:00Z".to_owned(),
        details: serde_json::Value::Null,
    })
}

fn agency_item(id: &str) -> FeedItem {
    FeedItem::Agency(AgencyRecord {
        id: id.to_owned(),
        name: "Neighborhood Watch".to_owned(),
        category: AgencyKind::Nonprofit,
        description: "Volunteer patrols".to_owned(),
        created_at: "2024-01-10T12:00:00Z".to_owned(),
    })
}

fn post_item(id: &str) -> FeedItem {
    FeedItem::Post(PostRecord {
        id: id.to_owned(),
        title: "Street lights fixed".to_owned(),
        body: "Repaired on Elm Street.".to_owned(),
        author_id: "u-2".to_owned(),
        author_name: None,
        created_at: "2024-05-03T09:30:00Z".to_owned(),
    })
}

fn ids(state: &FeedState) -> Vec<&str> {
    state.items.iter().map(FeedItem::id).collect()
}

// =============================================================
// FeedState defaults
// =============================================================

#[test]
fn feed_state_default_is_empty() {
    let state = FeedState::default();
    assert!(state.items.is_empty());
}

#[test]
fn feed_state_default_not_loading_no_error() {
    let state = FeedState::default();
    assert!(!state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// replace
// =============================================================

#[test]
fn replace_preserves_input_order() {
    let mut state = FeedState::default();
    state.replace(vec![crime_item("c-1"), agency_item("a-1"), post_item("p-1")]);
    assert_eq!(ids(&state), vec!["c-1", "a-1", "p-1"]);
}

#[test]
fn replace_overwrites_previous_items() {
    let mut state = FeedState::default();
    state.replace(vec![post_item("p-1"), post_item("p-2")]);
    state.replace(vec![crime_item("c-1")]);
    assert_eq!(ids(&state), vec!["c-1"]);
}

#[test]
fn replace_clears_fetch_status() {
    let mut state = FeedState {
        items: Vec::new(),
        loading: true,
        error: Some("feed request failed: 500".to_owned()),
    };
    state.replace(vec![post_item("p-1")]);
    assert!(!state.loading);
    assert!(state.error.is_none());
}
