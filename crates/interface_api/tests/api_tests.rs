//! API integration tests
//!
//! Exercises the router end-to-end with an in-memory document store,
//! asserting that responses are plain JSON numbers and strings all the way
//! through.

use std::sync::Arc;

use axum_test::TestServer;
use core_kernel::WarehouseId;
use domain_finance::Movement;
use domain_inventory::InventoryRecord;
use interface_api::{config::ApiConfig, create_router, store::JsonDocumentStore, AppState};
use serde_json::json;
use test_utils::{assert_presentation_eq, MovementBuilder};

fn movement(doc: serde_json::Value) -> Movement {
    serde_json::from_value(doc).unwrap()
}

fn record(doc: serde_json::Value) -> InventoryRecord {
    serde_json::from_value(doc).unwrap()
}

fn test_server(store: JsonDocumentStore) -> TestServer {
    let config = ApiConfig {
        reporting_timezone: "UTC".to_string(),
        ..Default::default()
    };
    let state = AppState::new(Arc::new(store), config);
    TestServer::new(create_router(state)).unwrap()
}

fn sample_movements() -> Vec<Movement> {
    vec![
        movement(json!({
            "direction": "income",
            "amount": { "$numberDecimal": "50.00" },
            "occurred_at": "2024-01-10T09:00:00Z",
            "category": "books"
        })),
        movement(json!({
            "direction": "expense",
            "amount": "30",
            "occurred_at": "2024-01-15T09:00:00Z",
            "category": "printing"
        })),
        movement(json!({
            "direction": "income",
            "amount": "50,00",
            "occurred_at": "2024-02-10T09:00:00Z",
            "category": "books"
        })),
        movement(json!({
            "direction": "expense",
            "amount": 10.0,
            "occurred_at": "2024-02-15T09:00:00Z"
        })),
    ]
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = test_server(JsonDocumentStore::default());

    server.get("/health").await.assert_status_ok();
    server.get("/health/ready").await.assert_status_ok();
}

#[tokio::test]
async fn test_summary_reduces_mixed_source_forms() {
    let server = test_server(JsonDocumentStore::in_memory(
        sample_movements(),
        vec![],
        vec![],
    ));

    let response = server.get("/api/v1/finance/summary").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["totals"]["income"]["value"], json!(100.0));
    assert_eq!(body["totals"]["income"]["display"], json!("100.00"));
    assert_eq!(body["totals"]["expenses"]["value"], json!(40.0));
    assert_eq!(body["totals"]["balance"]["value"], json!(60.0));
    assert_eq!(body["burn_rate"]["gross"]["value"], json!(20.0));
    assert_eq!(body["profit_margin"], json!(0.6));
    assert_eq!(body["months_observed"], json!(2));

    // Cash-flow-positive: profitable flag set, months omitted entirely.
    assert_eq!(body["runway"]["profitable"], json!(true));
    assert!(body["runway"].get("months").is_none());

    let score = body["health_score"].as_u64().unwrap();
    assert!(score <= 100);
}

#[tokio::test]
async fn test_summary_window_filtering() {
    let server = test_server(JsonDocumentStore::in_memory(
        sample_movements(),
        vec![],
        vec![],
    ));

    let response = server
        .get("/api/v1/finance/summary")
        .add_query_param("year", 2024)
        .add_query_param("month", 1)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["totals"]["income"]["value"], json!(50.0));
    assert_eq!(body["totals"]["expenses"]["value"], json!(30.0));
    assert_eq!(body["months_observed"], json!(1));
}

#[tokio::test]
async fn test_invalid_month_is_bad_request() {
    let server = test_server(JsonDocumentStore::default());

    let response = server
        .get("/api/v1/finance/summary")
        .add_query_param("year", 2024)
        .add_query_param("month", 13)
        .await;
    response.assert_status_bad_request();

    let response = server
        .get("/api/v1/finance/summary")
        .add_query_param("month", 6)
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_monthly_series_in_order() {
    let server = test_server(JsonDocumentStore::in_memory(
        sample_movements(),
        vec![],
        vec![],
    ));

    let response = server.get("/api/v1/finance/monthly").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    let points = body["points"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["period"], json!("2024-01"));
    assert_eq!(points[1]["period"], json!("2024-02"));
    assert_eq!(points[0]["income"]["value"], json!(50.0));
}

#[tokio::test]
async fn test_category_rollup_sorted_and_uncategorized() {
    let server = test_server(JsonDocumentStore::in_memory(
        sample_movements(),
        vec![],
        vec![],
    ));

    let response = server.get("/api/v1/finance/categories").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries[0]["key"], json!("books"));
    assert_eq!(entries[0]["total"]["value"], json!(100.0));
    assert!(entries
        .iter()
        .any(|e| e["key"] == json!("uncategorized") && e["total"]["value"] == json!(10.0)));
}

#[tokio::test]
async fn test_rollup_limit_caps_entries() {
    let movements: Vec<Movement> = (0..6)
        .map(|i| {
            MovementBuilder::expense()
                .with_amount(format!("{}", i + 1))
                .with_category(format!("cat-{}", i))
                .build()
        })
        .collect();
    let server = test_server(JsonDocumentStore::in_memory(movements, vec![], vec![]));

    let response = server
        .get("/api/v1/finance/categories")
        .add_query_param("limit", 3)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["entries"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_stock_matrix_has_explicit_zero_warehouses() {
    let item = uuid::Uuid::new_v4();
    let stocked = WarehouseId::new();
    let empty = WarehouseId::new();

    let records = vec![record(json!({
        "item": item,
        "item_title": "Tanuki Tales, vol. 1",
        "warehouse": stocked.as_uuid(),
        "quantity": 7,
        "unit_price": { "$numberDecimal": "12.50" }
    }))];
    let server = test_server(JsonDocumentStore::in_memory(
        vec![],
        records,
        vec![stocked, empty],
    ));

    let response = server.get("/api/v1/inventory/stock").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["total"], json!(7.0));

    let by_warehouse = items[0]["by_warehouse"].as_object().unwrap();
    assert_eq!(by_warehouse.len(), 2);
    assert_eq!(by_warehouse[&stocked.to_string()], json!(7.0));
    assert_eq!(by_warehouse[&empty.to_string()], json!(0.0));
}

#[tokio::test]
async fn test_valuation_endpoint() {
    let item = uuid::Uuid::new_v4();
    let warehouse = WarehouseId::new();

    let records = vec![record(json!({
        "item": item,
        "warehouse": warehouse.as_uuid(),
        "quantity": "3",
        "unit_price": "19,95"
    }))];
    let server = test_server(JsonDocumentStore::in_memory(vec![], records, vec![warehouse]));

    let response = server.get("/api/v1/inventory/valuation").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["total_value"]["display"], json!("59.85"));
    assert_presentation_eq(body["by_item"][0]["quantity"].as_f64().unwrap(), 3.0);
}
