mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::get,
};
use axum_test::TestServer;
use client_registry::api::handlers::{
    client_list_handler, create_client_handler, delete_client_handler, get_client_handler,
    update_client_handler,
};
use serde_json::json;
use sqlx::PgPool;

/// Build a test server with the full client route table.
fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route(
            "/api/clients",
            get(client_list_handler).post(create_client_handler),
        )
        .route(
            "/api/clients/{id}",
            get(get_client_handler)
                .put(update_client_handler)
                .delete(delete_client_handler),
        )
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── GET (list) ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_clients_empty(pool: PgPool) {
    let server = make_server(pool);
    let response = server.get("/api/clients").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn test_list_clients_returns_all(pool: PgPool) {
    common::insert_test_client(&pool, "Ana", Some("ana@example.com"), None).await;
    common::insert_test_client(&pool, "Bruno", None, Some("11999990000")).await;

    let server = make_server(pool);
    let response = server.get("/api/clients").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Ana");
    assert_eq!(items[1]["name"], "Bruno");
}

// ─── GET (by id) ─────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_client_found(pool: PgPool) {
    let id = common::insert_test_client(&pool, "Ana", Some("ana@example.com"), None).await;

    let server = make_server(pool);
    let response = server.get(&format!("/api/clients/{id}")).await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["email"], "ana@example.com");
    assert!(body["phone"].is_null());
}

#[sqlx::test]
async fn test_get_client_not_found(pool: PgPool) {
    let server = make_server(pool);
    let response = server.get("/api/clients/12345").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

// ─── POST (create) ───────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_client_assigns_id(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .post("/api/clients")
        .json(&json!({ "name": "Ana", "email": "ana@example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(body["name"], "Ana");

    let location = response.headers().get("location").unwrap();
    assert_eq!(
        location.to_str().unwrap(),
        format!("/api/clients/{id}")
    );
}

#[sqlx::test]
async fn test_create_client_ignores_caller_id(pool: PgPool) {
    let server = make_server(pool);

    // A caller-supplied id is discarded; the store assigns its own.
    let response = server
        .post("/api/clients")
        .json(&json!({ "id": 0, "name": "Ana" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body["id"].as_i64().unwrap() > 0);
}

#[sqlx::test]
async fn test_create_then_get_round_trip(pool: PgPool) {
    let server = make_server(pool);

    let created = server
        .post("/api/clients")
        .json(&json!({
            "name": "Ana",
            "email": "ana@example.com",
            "phone": "+55 11 99999-0000"
        }))
        .await
        .json::<serde_json::Value>();

    let id = created["id"].as_i64().unwrap();

    let fetched = server
        .get(&format!("/api/clients/{id}"))
        .await
        .json::<serde_json::Value>();

    assert_eq!(fetched["name"], "Ana");
    assert_eq!(fetched["email"], "ana@example.com");
    // Phone is stored in normalized form.
    assert_eq!(fetched["phone"], "+5511999990000");
}

#[sqlx::test]
async fn test_create_client_empty_name(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .post("/api/clients")
        .json(&json!({ "name": "" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_create_client_invalid_email(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .post("/api/clients")
        .json(&json!({ "name": "Ana", "email": "not-an-email" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_client_invalid_phone(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .post("/api/clients")
        .json(&json!({ "name": "Ana", "phone": "call-me" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

// ─── PUT (update) ────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_client_success(pool: PgPool) {
    let id = common::insert_test_client(&pool, "Ana", Some("ana@example.com"), None).await;

    let server = make_server(pool);
    let response = server
        .put(&format!("/api/clients/{id}"))
        .json(&json!({ "id": id, "name": "Ana Maria", "email": "ana@example.com" }))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);

    let fetched = server
        .get(&format!("/api/clients/{id}"))
        .await
        .json::<serde_json::Value>();

    assert_eq!(fetched["name"], "Ana Maria");
}

#[sqlx::test]
async fn test_update_client_replaces_fields_wholesale(pool: PgPool) {
    let id =
        common::insert_test_client(&pool, "Ana", Some("ana@example.com"), Some("11999990000"))
            .await;

    let server = make_server(pool);

    // Payload without email or phone clears both.
    server
        .put(&format!("/api/clients/{id}"))
        .json(&json!({ "id": id, "name": "Ana" }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let fetched = server
        .get(&format!("/api/clients/{id}"))
        .await
        .json::<serde_json::Value>();

    assert!(fetched["email"].is_null());
    assert!(fetched["phone"].is_null());
}

#[sqlx::test]
async fn test_update_client_identifier_mismatch(pool: PgPool) {
    let id = common::insert_test_client(&pool, "Ana", None, None).await;

    let server = make_server(pool);
    let response = server
        .put(&format!("/api/clients/{}", id + 1))
        .json(&json!({ "id": id, "name": "X" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "identifier_mismatch");

    // The addressed record is untouched.
    let fetched = server
        .get(&format!("/api/clients/{id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(fetched["name"], "Ana");
}

#[sqlx::test]
async fn test_update_client_not_found(pool: PgPool) {
    let server = make_server(pool);
    let response = server
        .put("/api/clients/12345")
        .json(&json!({ "id": 12345, "name": "Ghost" }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_update_client_empty_name(pool: PgPool) {
    let id = common::insert_test_client(&pool, "Ana", None, None).await;

    let server = make_server(pool);
    let response = server
        .put(&format!("/api/clients/{id}"))
        .json(&json!({ "id": id, "name": "" }))
        .await;

    response.assert_status_bad_request();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_client_success(pool: PgPool) {
    let id = common::insert_test_client(&pool, "Ana", None, None).await;

    let server = make_server(pool);
    let response = server.delete(&format!("/api/clients/{id}")).await;

    response.assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/clients/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_client_not_found(pool: PgPool) {
    let server = make_server(pool);
    let response = server.delete("/api/clients/12345").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_client_twice(pool: PgPool) {
    let id = common::insert_test_client(&pool, "Ana", None, None).await;

    let server = make_server(pool);

    // First delete succeeds.
    server
        .delete(&format!("/api/clients/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // Second delete reports 404 — not a repeated success.
    server
        .delete(&format!("/api/clients/{id}"))
        .await
        .assert_status_not_found();
}

// ─── Full lifecycle ──────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_client_lifecycle(pool: PgPool) {
    let server = make_server(pool);

    // Create; the store assigns the id.
    let created = server
        .post("/api/clients")
        .json(&json!({ "id": 0, "name": "Ana" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let id = created.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let fetched = server
        .get(&format!("/api/clients/{id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["name"], "Ana");

    // Matching ids: update succeeds and is visible.
    server
        .put(&format!("/api/clients/{id}"))
        .json(&json!({ "id": id, "name": "Ana Maria" }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let fetched = server
        .get(&format!("/api/clients/{id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(fetched["name"], "Ana Maria");

    // Mismatched ids: rejected, record unchanged.
    server
        .put(&format!("/api/clients/{}", id + 1))
        .json(&json!({ "id": id, "name": "X" }))
        .await
        .assert_status_bad_request();

    let fetched = server
        .get(&format!("/api/clients/{id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(fetched["name"], "Ana Maria");

    // Delete, then every further operation reports absence.
    server
        .delete(&format!("/api/clients/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/api/clients/{id}"))
        .await
        .assert_status_not_found();
    server
        .delete(&format!("/api/clients/{id}"))
        .await
        .assert_status_not_found();
}
