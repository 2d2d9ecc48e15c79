//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: validation → initial search → scroll
//! continuations → emitted documents.

use escroll::http::{HttpClient, HttpClientConfig};
use escroll::output::{JsonWriter, OutputStyle};
use escroll::scroll::{ScrollConfig, ScrollController};
use escroll::{Error, ErrorKind, SearchRequest};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page(scroll_id: &str, total: Option<u64>, first_doc: u64, hits: u64) -> Value {
    let hits: Vec<Value> = (first_doc..first_doc + hits)
        .map(|n| json!({"_index": "logs", "_id": n.to_string(), "_source": {"n": n}}))
        .collect();
    match total {
        Some(total) => json!({"_scroll_id": scroll_id, "hits": {"total": total, "hits": hits}}),
        None => json!({"_scroll_id": scroll_id, "hits": {"hits": hits}}),
    }
}

async fn backend() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"tagline": "You Know, for Search"})),
        )
        .mount(&mock_server)
        .await;
    mock_server
}

fn client_for(request: &SearchRequest) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(request.base_url().unwrap())
        .timeout(Duration::from_secs(5))
        .build();
    HttpClient::with_config(config).unwrap()
}

async fn mount_continuation(server: &MockServer, cursor: &str, response: Value) {
    Mock::given(method("POST"))
        .and(path("/_search/scroll"))
        .and(query_param("scroll", "30s"))
        .and(body_partial_json(json!({"scroll": "30s", "scroll_id": cursor})))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Full Sessions
// ============================================================================

#[tokio::test]
async fn test_scroll_25_hits_in_pages_of_10() {
    let server = backend().await;

    Mock::given(method("POST"))
        .and(path("/logs/_search"))
        .and(query_param("scroll", "30s"))
        .and(body_partial_json(json!({"size": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(page("c1", Some(25), 0, 10)))
        .expect(1)
        .mount(&server)
        .await;
    mount_continuation(&server, "c1", page("c2", None, 10, 10)).await;
    mount_continuation(&server, "c2", page("c3", None, 20, 5)).await;
    mount_continuation(&server, "c3", page("c4", None, 25, 0)).await;

    let request = SearchRequest::new(
        server.uri(),
        "/logs/_search?scroll=30s&filter_path=_scroll_id,hits.total,hits.hits._source&size=10",
    )
    .with_body(r#"{"size": 10, "query": {"match_all": {}}}"#);
    let client = client_for(&request);

    let mut writer = JsonWriter::new(Vec::new(), OutputStyle::Compact);
    let summary = ScrollController::new(&client)
        .run(&request, &mut writer)
        .await
        .unwrap();

    assert_eq!(summary.pages, 3);
    assert_eq!(summary.hits, 25);
    assert_eq!(summary.total_hits, Some(25));

    let out = String::from_utf8(writer.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 25);
    assert_eq!(lines[0], r#"{"n":0}"#);
    assert_eq!(lines[24], r#"{"n":24}"#);
}

#[tokio::test]
async fn test_object_total_and_pretty_output() {
    let server = backend().await;

    Mock::given(method("POST"))
        .and(path("/logs/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_scroll_id": "c1",
            "hits": {
                "total": {"value": 5, "relation": "eq"},
                "hits": [
                    {"_source": {"z": 1, "a": 2}},
                    {"_source": {"z": 3, "a": 4}},
                    {"_source": {"z": 5, "a": 6}},
                    {"_source": {"z": 7, "a": 8}},
                    {"_source": {"z": 9, "a": 10}}
                ]
            }
        })))
        .mount(&server)
        .await;
    mount_continuation(&server, "c1", page("c2", None, 0, 0)).await;

    let request = SearchRequest::new(server.uri(), "/logs/_search?scroll=30s");
    let client = client_for(&request);

    let mut writer = JsonWriter::new(Vec::new(), OutputStyle::Pretty);
    let summary = ScrollController::new(&client)
        .run(&request, &mut writer)
        .await
        .unwrap();

    assert_eq!(summary.total_hits, Some(5));
    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert!(out.starts_with("{\n  \"z\": 1,\n  \"a\": 2\n}\n"));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_expired_cursor_is_fetch_error() {
    let server = backend().await;

    Mock::given(method("POST"))
        .and(path("/logs/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page("c1", Some(100), 0, 10)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/_search/scroll"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"error":{"type":"search_context_missing_exception"}}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = SearchRequest::new(server.uri(), "/logs/_search?scroll=30s");
    let client = client_for(&request);

    let mut docs: Vec<Value> = Vec::new();
    let err = ScrollController::new(&client)
        .run(&request, &mut docs)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Fetch);
    assert!(matches!(err, Error::Fetch { status: Some(404), .. }));
    assert_eq!(docs.len(), 10);
}

#[tokio::test]
async fn test_unhealthy_backend_is_connectivity_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/logs/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page("c1", Some(1), 0, 1)))
        .expect(0)
        .mount(&server)
        .await;

    let request = SearchRequest::new(server.uri(), "/logs/_search?scroll=30s");
    let client = client_for(&request);

    let mut docs: Vec<Value> = Vec::new();
    let err = ScrollController::new(&client)
        .with_config(ScrollConfig::default())
        .run(&request, &mut docs)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Connectivity);
    assert_eq!(err.exit_code(), 4);
}

#[tokio::test]
async fn test_cancel_abandons_in_flight_continuation() {
    let server = backend().await;

    Mock::given(method("POST"))
        .and(path("/logs/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page("c1", Some(100), 0, 10)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/_search/scroll"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page("c2", None, 10, 10))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let request = SearchRequest::new(server.uri(), "/logs/_search?scroll=30s");
    let client = client_for(&request);

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        trigger.cancel();
    });

    let started = Instant::now();
    let mut docs: Vec<Value> = Vec::new();
    let err = ScrollController::new(&client)
        .with_cancellation(cancel)
        .run(&request, &mut docs)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Cancelled), "{err}");
    assert_eq!(err.exit_code(), 130);
    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(docs.len(), 10);
}

#[tokio::test]
async fn test_delete_by_query_never_reaches_backend() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let request = SearchRequest::new(server.uri(), "/logs/_delete_by_query?scroll=30s")
        .with_body(r#"{"query": {"match_all": {}}}"#);
    let client = client_for(&request);

    let mut docs: Vec<Value> = Vec::new();
    let err = ScrollController::new(&client)
        .run(&request, &mut docs)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::PolicyViolation);
}
