//! Station history client tests against a mock history API.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xmsync::station::{HISTORY_LIMIT, StationClient};
use xmsync::types::PlayEvent;

#[tokio::test]
async fn test_history_returns_tracks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/station/lifewithjohnmayer/history"))
        .and(query_param("since", "1748736000000"))
        .and(query_param("limit", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [
                { "artist": "John Mayer", "title": "Gravity", "id": "x1", "spotify": null },
                { "artist": "Tom Petty", "title": "Free Fallin'" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let station = StationClient::new(server.uri());
    let events = station
        .history("lifewithjohnmayer", 1_748_736_000_000)
        .await
        .unwrap();

    assert_eq!(
        events,
        vec![
            PlayEvent {
                artist: "John Mayer".to_string(),
                title: "Gravity".to_string()
            },
            PlayEvent {
                artist: "Tom Petty".to_string(),
                title: "Free Fallin'".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_history_without_tracks_key_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/station/octane/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0 })))
        .mount(&server)
        .await;

    let events = StationClient::new(server.uri())
        .history("octane", 0)
        .await
        .unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_history_with_null_tracks_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/station/octane/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracks": null })))
        .mount(&server)
        .await;

    let events = StationClient::new(server.uri())
        .history("octane", 0)
        .await
        .unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_history_error_status_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/station/octane/history"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = StationClient::new(server.uri())
        .history("octane", 0)
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let station = StationClient::new("https://xmplaylist.com/api/");
    assert_eq!(station.base_url(), "https://xmplaylist.com/api");
    assert_eq!(HISTORY_LIMIT, 500);
}
