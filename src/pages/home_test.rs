use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: Some("alice@example.com".to_owned()),
        avatar_url: None,
    }
}

// =============================================================
// report_panel
// =============================================================

#[test]
fn report_panel_signed_out_shows_signin_and_mutes_control() {
    let panel = report_panel(None);
    assert!(!panel.enabled);
    assert!(panel.show_signin);
}

#[test]
fn report_panel_signed_in_enables_control_without_signin() {
    let user = make_user();
    let panel = report_panel(Some(&user));
    assert!(panel.enabled);
    assert!(!panel.show_signin);
}

#[test]
fn report_panel_is_deterministic_for_identical_input() {
    let user = make_user();
    assert_eq!(report_panel(Some(&user)), report_panel(Some(&user)));
    assert_eq!(report_panel(None), report_panel(None));
}

// =============================================================
// show-nearby target
// =============================================================

#[test]
fn show_nearby_uses_the_current_location_token() {
    assert_eq!(CURRENT_LOCATION, "current");
}
