//! Integration tests for the paginated API client
//!
//! A minimal HTTP/1.1 responder on a loopback port stands in for the remote
//! API, serving `offset`-addressed pages from a fixed character list.

use herograph_api::{ApiConfig, ApiError, ApiResource, MarvelApiClient};
use herograph_domain::EntityType;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const TOTAL: usize = 5;

fn character_json(index: usize) -> String {
    format!(
        r#"{{"id": {index}, "name": "Hero {index}",
            "comics": {{"items": [{{"resourceURI": "c{index}"}}, {{"resourceURI": "shared"}}]}},
            "series": {{"items": []}}, "stories": {{"items": []}}, "events": {{"items": []}}}}"#
    )
}

fn query_value(path: &str, key: &str) -> Option<usize> {
    let query = path.split_once('?')?.1;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| v.parse().ok())
}

fn respond(path: &str) -> (u16, String) {
    if path.starts_with("/broken") {
        return (500, "upstream down".to_string());
    }
    if path.starts_with("/missing-results") {
        return (200, r#"{"data": {"total": 3}}"#.to_string());
    }
    if path.starts_with("/v1/comics") {
        return (200, r#"{"data": {"total": 48000, "results": []}}"#.to_string());
    }
    if path.starts_with("/v1/characters") {
        let offset = query_value(path, "offset").unwrap_or(0);
        let limit = query_value(path, "limit").unwrap_or(TOTAL);
        let results: Vec<String> = (offset..TOTAL.min(offset + limit)).map(character_json).collect();
        let body = format!(
            r#"{{"data": {{"offset": {offset}, "total": {TOTAL}, "results": [{}]}}}}"#,
            results.join(",")
        );
        return (200, body);
    }
    (404, "not found".to_string())
}

/// Start the stub server; returns its base URL and the request paths it saw
async fn serve() -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);

    tokio::spawn(async move {
        loop {
            let (mut socket, _) = match listener.accept().await {
                Ok(connection) => connection,
                Err(_) => return,
            };

            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = socket.read(&mut buffer).await.unwrap_or(0);
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..read]);
            }

            let request = String::from_utf8_lossy(&request);
            let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
            log.lock().unwrap().push(path.clone());

            let (status, body) = respond(&path);
            let response = format!(
                "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{address}"), seen)
}

fn client(base: &str, data_max: u32) -> MarvelApiClient {
    MarvelApiClient::new(ApiConfig {
        url: base.to_string(),
        api_key: "public".to_string(),
        hash: "0123abcd".to_string(),
        ts: "1".to_string(),
        data_max,
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_catalog_pages_through_everything() {
    let (base, seen) = serve().await;
    let client = client(&format!("{base}/v1"), 2);

    let records = client.fetch_catalog().await.unwrap();
    let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Hero 0", "Hero 1", "Hero 2", "Hero 3", "Hero 4"]);

    // One count request, then ceil(5 / 2) = 3 pages
    let paths = seen.lock().unwrap().clone();
    assert_eq!(paths.len(), 4);
    assert!(paths[1].contains("offset=0"));
    assert!(paths[2].contains("offset=2"));
    assert!(paths[3].contains("offset=4"));
    assert!(paths.iter().all(|path| path.contains("apikey=public") && path.contains("limit=2")));
}

#[tokio::test]
async fn test_total_count_for_entity() {
    let (base, _) = serve().await;
    let client = client(&format!("{base}/v1"), 100);

    let total = client
        .total_count(ApiResource::Entity(EntityType::Comics))
        .await
        .unwrap();
    assert_eq!(total, 48000);
}

#[tokio::test]
async fn test_error_status_propagates() {
    let (base, _) = serve().await;
    let client = client(&format!("{base}/broken"), 100);

    match client.fetch_page(0).await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream down");
        }
        other => panic!("Expected Status error, got {:?}", other.map(|r| r.len())),
    }
}

#[tokio::test]
async fn test_missing_results_is_invalid_response() {
    let (base, _) = serve().await;
    let client = client(&format!("{base}/missing-results"), 100);

    assert!(matches!(
        client.fetch_page(0).await,
        Err(ApiError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_fetched_records_build_a_catalog() {
    let (base, _) = serve().await;
    let client = client(&format!("{base}/v1"), 3);

    let records = client.fetch_all_characters(5).await.unwrap();
    let characters = herograph_catalog::loader::into_characters(records).unwrap();
    let catalog = herograph_catalog::CharacterCatalog::new(characters).unwrap();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.get("Hero 3").unwrap().comics.len(), 2);
}
