//! Integration tests for the HTTP client wrapper.
//!
//! All tests run against wiremock; no real backend is contacted.

use hadith_core::config::{ApiConfig, QUESTION_RESULT_LIMIT};
use hadith_core::search_page::{run_request, PageResponse, SearchPageState};
use hadith_core::{ApiError, HadithApi, HttpHadithApi, SearchFilters, SearchMode};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HttpHadithApi {
    HttpHadithApi::new(&ApiConfig::new(server.uri())).expect("mock server URI is valid")
}

fn hadith_json(id: &str, score: f64) -> serde_json::Value {
    json!({
        "hadith_id": id,
        "text": format!("Narration {}", id),
        "score": score,
        "metadata": {
            "source": "Bukhari",
            "hadith_no": "12",
            "chapter": "Belief",
            "chapter_no": "2"
        }
    })
}

// ─── /search ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_sends_query_and_limit_without_source() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "night prayer"))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("filter_source"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([hadith_json("a", 0.4), hadith_json("b", 0.8)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let results = client(&server)
        .search("night prayer", &SearchFilters::default())
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].hadith_id, "a");
    assert_eq!(results[1].metadata.source_name().as_deref(), Some("Bukhari"));
}

#[tokio::test]
async fn test_search_sends_source_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "charity"))
        .and(query_param("filter_source", "Muslim"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let filters = SearchFilters {
        source: Some("Muslim".to_string()),
        limit: 20,
    };
    let results = client(&server).search("charity", &filters).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_server_error_is_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let err = client(&server)
        .search("anything", &SearchFilters::default())
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/search"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    let err = client(&server)
        .search("anything", &SearchFilters::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let api = HttpHadithApi::new(&ApiConfig::new(uri)).unwrap();
    let err = api
        .search("anything", &SearchFilters::default())
        .await
        .unwrap_err();
    assert!(err.is_transport(), "unexpected error: {:?}", err);
}

// ─── /answer ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_ask_sends_question_and_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/answer"))
        .and(query_param("question", "What does Islam say about kindness?"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Kindness is praised.\n\nIt is rewarded.",
            "hadiths": [hadith_json("k1", 0.7)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .ask("What does Islam say about kindness?", QUESTION_RESULT_LIMIT)
        .await
        .unwrap();

    assert_eq!(response.answer, "Kindness is praised.\n\nIt is rewarded.");
    assert_eq!(response.hadiths.len(), 1);
}

// ─── Search page over HTTP ───────────────────────────────────────────

#[tokio::test]
async fn test_question_submission_ignores_filter_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/answer"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Fasting is prescribed.",
            "hadiths": [hadith_json("low", 0.2), hadith_json("high", 0.9)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server);
    let mut state = SearchPageState::new();
    let _ = state.change_filters(SearchFilters::default().with_limit_value("1000"));

    let request = state.submit("Why fast?", SearchMode::Question).unwrap();
    let outcome = run_request(&api, &request.kind).await;
    assert!(matches!(outcome, Ok(PageResponse::Answer { .. })));
    assert!(state.apply(request.ticket, outcome));

    assert_eq!(state.answer(), Some("Fasting is prescribed."));
    assert_eq!(state.results()[0].hadith_id, "high");
    assert!(!state.show_filter_panel());
}
