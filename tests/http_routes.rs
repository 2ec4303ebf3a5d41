//! In-process HTTP tests for the desk routes.

use std::sync::Arc;

use atelier_core::{FixtureStore, MockDesk};
use atelier_web::{create_app, AppState};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let store = Arc::new(FixtureStore::bundled().expect("bundled fixtures parse"));
    create_app(AppState::new(Arc::new(MockDesk::new(store))))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, body)
}

// =============================================================================
// Stocks
// =============================================================================

#[tokio::test]
async fn stocks_route_returns_data_and_meta() {
    let (status, body) = get("/api/stocks").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(30));
    assert_eq!(body["meta"]["total"], 30);
    assert_eq!(body["meta"]["sectors"].as_array().map(Vec::len), Some(8));
    assert_eq!(body["data"][0]["ticker"], "ZEND");
    assert_eq!(body["data"][0]["changePercent"], 2.14);
}

#[tokio::test]
async fn stocks_route_applies_camel_case_filters() {
    let (status, body) =
        get("/api/stocks?sector=Energy&change=positive&minPrice=30&maxCap=30000000000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"][0]["ticker"], "PTRN");
    assert_eq!(body["meta"]["sectors"][2], "Energy");
}

#[tokio::test]
async fn malformed_bound_is_ignored_not_rejected() {
    let (status, body) = get("/api/stocks?minPrice=abc&search=zend").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 1);
}

#[tokio::test]
async fn repeated_stock_param_keeps_first_value() {
    // Given: A query string with the sector key supplied twice
    // When: The stock list is requested
    let (status, body) = get("/api/stocks?sector=Energy&sector=Utilities").await;

    // Then: The request succeeds and filters on the first value only
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().expect("array");
    assert!(!data.is_empty());
    assert!(data.iter().all(|stock| stock["sector"] == "Energy"));
}

#[tokio::test]
async fn undecodable_stock_params_do_not_fail_the_listing() {
    let (status, body) = get("/api/stocks?search=%zz&minPrice=%FF&bogus").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 0);
    assert_eq!(body["meta"]["sectors"].as_array().map(Vec::len), Some(8));
}

// =============================================================================
// Bonds
// =============================================================================

#[tokio::test]
async fn bonds_route_returns_summaries_only() {
    let (status, body) = get("/api/bonds").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 8);
    assert_eq!(
        body["data"][2],
        json!({
            "id": "bond-003",
            "name": "Solara Grid 2040",
            "issuer": "Solara Power Holdings",
            "rating": "A"
        })
    );
}

#[tokio::test]
async fn bond_detail_route_returns_full_record() {
    let (status, body) = get("/api/bonds/bond-003").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("meta").is_none());
    assert_eq!(body["data"]["couponRate"], 5.1);
    assert_eq!(body["data"]["maturity"], "2040-11-30");
    assert_eq!(body["data"]["nextCall"], "2035-11-30");
    assert_eq!(body["data"]["currency"], "USD");
}

#[tokio::test]
async fn non_callable_bond_has_null_next_call() {
    let (_, body) = get("/api/bonds/bond-002").await;

    assert!(body["data"]["nextCall"].is_null());
}

#[tokio::test]
async fn unknown_bond_returns_404_with_error_body() {
    let (status, body) = get("/api/bonds/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "error": "bond 'does-not-exist' not found", "status": 404 })
    );
}

// =============================================================================
// Onboarding
// =============================================================================

#[tokio::test]
async fn service_brief_route_returns_profile() {
    let (status, body) = get("/api/service-brief").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Eleanor Vance");
    assert_eq!(body["data"]["assetClass"], "equities");
    assert_eq!(body["data"]["instrument"], "inst-eq-003");
}

#[tokio::test]
async fn instruments_route_filters_by_asset_class() {
    let (status, body) = get("/api/instruments?assetClass=equities").await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().expect("array");
    assert_eq!(data.len(), 5);
    assert!(data.contains(&json!({
        "id": "inst-eq-003",
        "name": "Emerging Markets Fund",
        "ticker": "EMMK"
    })));
}

#[tokio::test]
async fn instruments_route_returns_empty_for_unknown_or_missing_class() {
    for uri in ["/api/instruments?assetClass=crypto", "/api/instruments"] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({ "data": [] }), "{uri}");
    }
}

#[tokio::test]
async fn repeated_asset_class_keeps_first_value() {
    let (status, body) = get("/api/instruments?assetClass=equities&assetClass=x").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["data"][0]["id"], "inst-eq-001");
}

#[tokio::test]
async fn health_route_lists_operations() {
    let (status, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["operations"].as_array().map(Vec::len), Some(5));
    assert!(body["uptimeSecs"].is_u64());
}
