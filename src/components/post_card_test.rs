use super::*;
use crate::net::types::{AgencyKind, AgencyRecord, GeoPoint, PostRecord};

// =============================================================
// Helpers
// =============================================================

fn crime_record(location: Option<GeoPoint>) -> CrimeRecord {
    CrimeRecord {
        id: "c-1".to_owned(),
        title: "Bike theft".to_owned(),
        description: "Lock cut".to_owned(),
        location,
        occurred_at: None,
        reporter_id: None,
        created_at: "2024-05-02T08:00:00Z".to_owned(),
        details: serde_json::Value::Null,
    }
}

// =============================================================
// map_target
// =============================================================

#[test]
fn map_target_some_for_crime_with_location() {
    let item = FeedItem::Crime(crime_record(Some(GeoPoint { lat: 52.37, lng: 4.89 })));
    let target = map_target(&item);
    assert_eq!(target.map(|crime| crime.id), Some("c-1".to_owned()));
}

#[test]
fn map_target_none_for_crime_without_location() {
    let item = FeedItem::Crime(crime_record(None));
    assert!(map_target(&item).is_none());
}

#[test]
fn map_target_none_for_agency_and_post() {
    let agency = FeedItem::Agency(AgencyRecord {
        id: "a-1".to_owned(),
        name: "Neighborhood Watch".to_owned(),
        category: AgencyKind::Nonprofit,
        description: "Volunteer patrols".to_owned(),
        created_at: "2024-01-10T12:00:00Z".to_owned(),
    });
    let post = FeedItem::Post(PostRecord {
        id: "p-1".to_owned(),
        title: "Street lights fixed".to_owned(),
        body: "Repaired on Elm Street.".to_owned(),
        author_id: "u-2".to_owned(),
        author_name: None,
        created_at: "2024-05-03T09:30:00Z".to_owned(),
    });
    assert!(map_target(&agency).is_none());
    assert!(map_target(&post).is_none());
}
