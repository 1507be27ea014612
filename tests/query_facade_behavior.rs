//! Query facade behavior against a scripted transport.

use std::sync::Arc;

use stockpilot_core::{
    ApiErrorKind, ChartRange, RequestSlot, StockApi, StockQuote, Symbol, DEFAULT_NEWS_LIMIT,
};
use stockpilot_tests::ScriptedHttpClient;

const BASE: &str = "http://localhost:8080/api/stocks";

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("symbol")
}

const QUOTE_BODY: &str = r#"{
    "symbol": "AAPL",
    "name": "Apple Inc.",
    "price": 150.0,
    "change": 2.5,
    "changePercent": 1.69,
    "volume": 51230000
}"#;

#[tokio::test]
async fn blank_search_never_touches_the_network() {
    let http = Arc::new(ScriptedHttpClient::new());
    let api = StockApi::new(BASE, http.clone());

    assert!(api.search("").await.expect("must succeed").is_empty());
    assert!(api.search("   ").await.expect("must succeed").is_empty());
    assert_eq!(http.request_count(), 0);
}

#[tokio::test]
async fn search_encodes_query_and_decodes_results() {
    let body = r#"[
        {"symbol": "AAPL", "name": "Apple Inc.", "exchange": "NASDAQ", "type": "EQUITY"},
        {"symbol": "APLE", "name": "Apple Hospitality REIT", "exchange": "NYSE", "type": "EQUITY"}
    ]"#;
    let http = Arc::new(ScriptedHttpClient::new().respond("/search", 200, body));
    let api = StockApi::new(BASE, http.clone());

    let results = api.search("apple inc").await.expect("must succeed");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].symbol, symbol("AAPL"));

    let urls = http.requested_urls();
    assert_eq!(urls.len(), 1);
    assert!(urls[0].contains("/search?query=apple%20inc"));
}

#[tokio::test]
async fn quote_decodes_wire_payload() {
    let http = Arc::new(ScriptedHttpClient::new().respond("/quote/AAPL", 200, QUOTE_BODY));
    let api = StockApi::new(BASE, http);

    let quote = api.quote(&symbol("AAPL")).await.expect("must succeed");
    assert_eq!(quote.price, 150.0);
    assert_eq!(quote.change_percent, 1.69);
}

#[tokio::test]
async fn non_success_status_surfaces_as_status_error() {
    let http = Arc::new(ScriptedHttpClient::new().respond("/quote/NOPE", 404, "{}"));
    let api = StockApi::new(BASE, http);

    let error = api.quote(&symbol("NOPE")).await.expect_err("must fail");
    assert_eq!(error.kind(), ApiErrorKind::Status);
    assert_eq!(error.http_status(), Some(404));
}

#[tokio::test]
async fn malformed_payload_surfaces_as_decode_error() {
    let http = Arc::new(ScriptedHttpClient::new().respond("/quote/AAPL", 200, "<html>oops</html>"));
    let api = StockApi::new(BASE, http);

    let error = api.quote(&symbol("AAPL")).await.expect_err("must fail");
    assert_eq!(error.kind(), ApiErrorKind::Decode);
}

#[tokio::test]
async fn historical_sends_the_named_range() {
    let http = Arc::new(ScriptedHttpClient::new().respond("/historical/AAPL", 200, "[]"));
    let api = StockApi::new(BASE, http.clone());

    let bars = api
        .historical(&symbol("AAPL"), ChartRange::SixMonths)
        .await
        .expect("must succeed");
    assert!(bars.is_empty());
    assert!(http.requested_urls()[0].ends_with("/historical/AAPL?range=6mo"));
}

#[tokio::test]
async fn news_sends_the_default_limit() {
    let http = Arc::new(ScriptedHttpClient::new().respond("/news/AAPL", 200, "[]"));
    let api = StockApi::new(BASE, http.clone());

    api.news(&symbol("AAPL"), DEFAULT_NEWS_LIMIT)
        .await
        .expect("must succeed");
    assert!(http.requested_urls()[0].ends_with("/news/AAPL?limit=10"));
}

#[tokio::test]
async fn analysis_decodes_summary() {
    let body = r#"{
        "volatility": 0.28,
        "maxDrawdown": -0.31,
        "riskLevel": "HIGH",
        "returns": 0.44,
        "dataPoints": 252
    }"#;
    let http = Arc::new(ScriptedHttpClient::new().respond("/analysis/TSLA", 200, body));
    let api = StockApi::new(BASE, http);

    let analysis = api
        .analysis(&symbol("TSLA"), ChartRange::OneYear)
        .await
        .expect("must succeed");
    assert_eq!(analysis.data_points, 252);
    assert_eq!(analysis.risk_level.as_str(), "HIGH");
}

#[tokio::test]
async fn health_decodes_liveness_payload() {
    let body = r#"{"status": "UP", "service": "StockPilot API"}"#;
    let http = Arc::new(ScriptedHttpClient::new().respond("/health", 200, body));
    let api = StockApi::new(BASE, http);

    let health = api.health().await.expect("must succeed");
    assert_eq!(health.status, "UP");
    assert_eq!(health.service.as_deref(), Some("StockPilot API"));
}

#[tokio::test]
async fn slow_earlier_quote_cannot_overwrite_faster_later_one() {
    let first_http = Arc::new(ScriptedHttpClient::new().respond(
        "/quote/AAPL",
        200,
        r#"{"symbol":"AAPL","name":"Apple Inc.","price":149.0,"change":0.0,"changePercent":0.0}"#,
    ));
    let second_http = Arc::new(ScriptedHttpClient::new().respond("/quote/AAPL", 200, QUOTE_BODY));

    let first_api = StockApi::new(BASE, first_http);
    let second_api = StockApi::new(BASE, second_http);

    let mut slot: RequestSlot<StockQuote> = RequestSlot::new();
    let first_ticket = slot.begin();
    let second_ticket = slot.begin();

    // The later request resolves first and is applied.
    let second_quote = second_api.quote(&symbol("AAPL")).await.expect("quote");
    assert!(slot.complete(second_ticket, Ok(second_quote)));

    // The earlier request straggles in afterward and must be discarded.
    let first_quote = first_api.quote(&symbol("AAPL")).await.expect("quote");
    assert!(!slot.complete(first_ticket, Ok(first_quote)));

    assert_eq!(slot.latest_value().expect("value").price, 150.0);
}
