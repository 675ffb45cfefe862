//! HTTP API integration tests
//!
//! Drives the full router against an in-memory database, asserting the
//! status-code contract: create 201/400/409, read 200/404, update
//! 200/400/404/409, delete 200/404.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use tower::ServiceExt;

use restman_server::{Config, ServerState, api};

async fn test_app() -> Router {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    let config = Config::with_overrides("/tmp/restman-http-test", 0);
    let state = ServerState::new(config, db);
    api::router().with_state(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Create a table and return its id ("dining_table:key")
async fn seed_table(app: &Router, name: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/tables",
        Some(json!({ "name": name, "capacity": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

fn reservation_payload(table_id: &str, start_time: &str) -> Value {
    json!({
        "party_size": 2,
        "name": "Ana",
        "start_time": start_time,
        "table_id": table_id,
    })
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, "GET", "/health/detailed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn reservation_create_read_update_delete() {
    let app = test_app().await;
    let table = seed_table(&app, "T1").await;

    // Create
    let (status, created) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation_payload(&table, "2030-05-01T18:00:00+01:00")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Ana");
    assert_eq!(created["party_size"], 2);

    // Read back
    let (status, fetched) = send(&app, "GET", &format!("/api/reservations/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);

    // List
    let (status, all) = send(&app, "GET", "/api/reservations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 1);

    // Update within its own prior window
    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/reservations/{id}"),
        Some(reservation_payload(&table, "2030-05-01T19:00:00+01:00")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["start_time"], "2030-05-01T19:00:00+01:00");

    // Delete
    let (status, _) = send(&app, "DELETE", &format!("/api/reservations/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/api/reservations/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reservation_conflicts_map_to_409() {
    let app = test_app().await;
    let table = seed_table(&app, "T1").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation_payload(&table, "2030-05-01T18:00:00+01:00")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // 19:30 falls inside [18:00, 21:00)
    let (status, body) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation_payload(&table, "2030-05-01T19:30:00+01:00")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");

    // Exactly at the window's end boundary succeeds
    let (status, _) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation_payload(&table, "2030-05-01T21:00:00+01:00")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn reservation_validation_maps_to_400() {
    let app = test_app().await;
    let table = seed_table(&app, "T1").await;

    // Past start instant
    let (status, body) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation_payload(&table, "2001-01-01T12:00:00+00:00")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    // Unknown table
    let (status, _) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(reservation_payload("does-not-exist", "2030-05-01T18:00:00+01:00")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Party size below 1
    let mut payload = reservation_payload(&table, "2030-05-01T18:00:00+01:00");
    payload["party_size"] = json!(0);
    let (status, _) = send(&app, "POST", "/api/reservations", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was persisted by the rejected requests
    let (_, all) = send(&app, "GET", "/api/reservations", None).await;
    assert!(all.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn reservation_update_and_delete_missing_map_to_404() {
    let app = test_app().await;
    let table = seed_table(&app, "T1").await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/reservations/no-such-id",
        Some(reservation_payload(&table, "2030-05-01T18:00:00+01:00")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/reservations/no-such-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn table_crud_round_trip() {
    let app = test_app().await;

    let id = seed_table(&app, "Window 2").await;

    let (status, fetched) = send(&app, "GET", &format!("/api/tables/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Window 2");
    assert_eq!(fetched["capacity"], 4);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/tables/{id}"),
        Some(json!({ "capacity": 6, "location": "terrace" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["capacity"], 6);
    assert_eq!(updated["location"], "terrace");

    let (status, _) = send(&app, "DELETE", &format!("/api/tables/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/api/tables/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn table_validation_and_duplicates() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/tables",
        Some(json!({ "name": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    seed_table(&app, "T1").await;
    let (status, _) = send(
        &app,
        "POST",
        "/api/tables",
        Some(json!({ "name": "T1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn product_crud_and_validation() {
    let app = test_app().await;

    // Create
    let (status, created) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Paella", "price": "18.50", "category": "mains" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Paella");

    // Duplicate name
    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Paella", "price": "9.00" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Negative price
    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "name": "Flan", "price": "-1.00" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Batch lookup fails on the first unknown name
    let (status, _) = send(
        &app,
        "POST",
        "/api/products/by-names",
        Some(json!({ "names": ["Paella", "Flan"] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Update price
    let (status, updated) = send(
        &app,
        "PUT",
        "/api/products/Paella",
        Some(json!({ "price": "19.00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], "19.00");

    // Delete, then 404
    let (status, _) = send(&app, "DELETE", "/api/products/Paella", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", "/api/products/Paella", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn payment_lookup_failure_maps_to_404() {
    // No payment service is listening on the configured URL, so the
    // proxy's request error must surface as a plain 404
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/api/payments/by-order/ord-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
}
