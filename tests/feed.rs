use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use munros::*;
use pretty_assertions::assert_eq;

/// Serves exactly one request with the given status line and body.
fn serve_once(status: &'static str, body: &'static str) -> FeedConfig {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = vec![];
        let mut buffer = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buffer).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buffer[..n]);
        }
        let request = String::from_utf8_lossy(&request).to_string();
        assert!(request.starts_with("GET /api/munros "), "{}", request);
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
    });

    FeedConfig {
        host: "127.0.0.1".to_string(),
        port,
        timeout: Duration::from_secs(5),
    }
}

#[test]
fn success_yields_locations() {
    let config = serve_once(
        "200 OK",
        r#"[{"hillname":"Ben Nevis","latitude":56.796891,"longitude":-5.003675,"metres":1345},
            {"hillname":"Ben Lomond","latitude":56.19016,"longitude":-4.633013,"metres":974}]"#,
    );
    let locations = fetch_locations(&config).unwrap();
    assert_eq!(
        locations,
        vec![
            Location::new("Ben Nevis", 56.796891, -5.003675, 1345.0),
            Location::new("Ben Lomond", 56.19016, -4.633013, 974.0),
        ]
    );
}

#[test]
fn server_error_is_reported_and_swallowed() {
    let config = serve_once("500 Internal Server Error", "");
    match fetch_locations(&config) {
        Err(FeedError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected a status error, got {:?}", other),
    }

    let config = serve_once("500 Internal Server Error", "");
    assert!(fetch_locations_or_empty(&config).is_empty());
}

#[test]
fn malformed_payload_degrades_to_empty() {
    let config = serve_once("200 OK", r#"{"data": "nope"}"#);
    assert!(matches!(
        fetch_locations(&config),
        Err(FeedError::Decode { .. })
    ));

    let config = serve_once("200 OK", r#"{"data": "nope"}"#);
    assert!(fetch_locations_or_empty(&config).is_empty());
}

#[test]
fn refused_connection_degrades_to_empty() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = FeedConfig {
        host: "127.0.0.1".to_string(),
        port,
        timeout: Duration::from_secs(2),
    };
    assert!(matches!(
        fetch_locations(&config),
        Err(FeedError::Transport { .. })
    ));
    assert!(fetch_locations_or_empty(&config).is_empty());
}

#[test]
fn failed_fetch_keeps_bundled_locations() {
    let mut map = MapState::new(LocationStore::bundled(), MapOptions::default());
    let bundled = map.store().len();
    assert!(bundled > 0);

    let config = serve_once("500 Internal Server Error", "");
    let (tx, rx) = crossbeam_channel::bounded(1);
    let mut loader = LocationLoader::spawn(config, move || {
        let _ = tx.send(());
    });
    rx.recv_timeout(Duration::from_secs(10)).unwrap();

    let locations = loader.try_finish().unwrap();
    assert!(locations.is_empty());
    assert!(loader.is_finished());
    assert_eq!(loader.try_finish(), None);

    assert!(!map.replace_locations(locations));
    assert_eq!(map.store().len(), bundled);
    assert_eq!(map.markers().len(), bundled);
}

#[test]
fn loader_hands_over_remote_locations() {
    let config = serve_once(
        "200 OK",
        r#"[{"hillname":"Ben Hope","latitude":58.413385,"longitude":-4.608556,"metres":927}]"#,
    );
    let (tx, rx) = crossbeam_channel::bounded(1);
    let mut loader = LocationLoader::spawn(config, move || {
        let _ = tx.send(());
    });
    rx.recv_timeout(Duration::from_secs(10)).unwrap();

    let mut map = MapState::new(LocationStore::bundled(), MapOptions::default());
    assert!(map.replace_locations(loader.try_finish().unwrap()));
    assert_eq!(map.store().locations()[0].name, "Ben Hope");
    assert_eq!(map.markers().len(), 1);
}
