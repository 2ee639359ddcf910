use chrono::{TimeZone, Utc};
use xmsync::types::{PlayEvent, TrackRef};
use xmsync::utils::*;

// Helper function to create a test play event
fn create_test_event(artist: &str, title: &str) -> PlayEvent {
    PlayEvent {
        artist: artist.to_string(),
        title: title.to_string(),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Same input produces same output
    assert_eq!(challenge, generate_code_challenge(verifier));

    // Different input should produce different output
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // SHA256 digest in URL-safe base64 without padding is 43 characters
    assert_eq!(challenge.len(), 43);
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_code_challenge_known_vector() {
    // RFC 7636 appendix B
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(
        generate_code_challenge(verifier),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn test_window_start_ms() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let expected = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

    assert_eq!(window_start(now, 12).unwrap(), expected);
    assert_eq!(window_start_ms(now, 12).unwrap(), expected.timestamp_millis());
    assert_eq!(
        now.timestamp_millis() - window_start_ms(now, 12).unwrap(),
        12 * 60 * 60 * 1000
    );
}

#[test]
fn test_window_start_crosses_midnight() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 3, 30, 0).unwrap();
    let expected = Utc.with_ymd_and_hms(2024, 12, 31, 15, 30, 0).unwrap();

    assert_eq!(window_start(now, 12).unwrap(), expected);
    assert_eq!(
        window_start(now, 1).unwrap(),
        Utc.with_ymd_and_hms(2025, 1, 1, 2, 30, 0).unwrap()
    );
}

#[test]
fn test_window_start_out_of_range_is_an_error() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

    let err = window_start_ms(now, u32::MAX).unwrap_err();
    assert!(err.to_string().contains("out of range"));
    assert!(window_start(now, u32::MAX).is_err());
}

#[test]
fn test_window_start_at_largest_accepted_window() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let since = window_start(now, xmsync::config::MAX_WINDOW_HOURS).unwrap();
    assert_eq!((now - since).num_days(), 365);
}

#[test]
fn test_search_query_passes_fields_through() {
    let event = create_test_event("John Mayer", "Gravity");
    assert_eq!(search_query(&event), "artist:John Mayer track:Gravity");

    let event = create_test_event("Dead & Company", "Sugar Magnolia (Live) [Remastered]");
    assert_eq!(
        search_query(&event),
        "artist:Dead & Company track:Sugar Magnolia (Live) [Remastered]"
    );
}

#[test]
fn test_dedup_preserving_order() {
    let mut refs: Vec<TrackRef> = vec!["b".into(), "a".into(), "b".into(), "c".into(), "a".into()];

    dedup_preserving_order(&mut refs);

    let refs: Vec<&str> = refs.iter().map(|r| r.as_str()).collect();
    assert_eq!(refs, vec!["b", "a", "c"]);
}

#[test]
fn test_dedup_preserving_order_empty() {
    let mut refs: Vec<TrackRef> = Vec::new();
    dedup_preserving_order(&mut refs);
    assert!(refs.is_empty());
}

#[test]
fn test_playlist_batches() {
    let items: Vec<u32> = (0..250).collect();
    let sizes: Vec<usize> = playlist_batches(&items).map(|c| c.len()).collect();
    assert_eq!(sizes, vec![100, 100, 50]);

    let items: Vec<u32> = (0..100).collect();
    assert_eq!(playlist_batches(&items).count(), 1);

    let items: Vec<u32> = Vec::new();
    assert_eq!(playlist_batches(&items).count(), 0);
}
