use super::*;

#[test]
fn missing_or_blank_site_key_falls_back_to_test_key() {
    assert_eq!(resolve_site_key(None), TEST_SITE_KEY);
    assert_eq!(resolve_site_key(Some("  ")), TEST_SITE_KEY);
    assert_eq!(resolve_site_key(Some(" live-key ")), "live-key");
}

#[test]
fn token_maps_to_event() {
    assert_eq!(
        event_from_token(Some("tok".to_owned())),
        VerificationEvent::Verified("tok".to_owned())
    );
    assert_eq!(event_from_token(Some(String::new())), VerificationEvent::Expired);
    assert_eq!(event_from_token(None), VerificationEvent::Expired);
}

#[test]
fn script_requests_explicit_rendering() {
    assert!(SCRIPT_URL.ends_with("render=explicit"));
}
