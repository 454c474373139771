#![allow(dead_code)]

use client_registry::application::services::ClientService;
use client_registry::infrastructure::persistence::PgClientRepository;
use client_registry::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn insert_test_client(
    pool: &PgPool,
    name: &str,
    email: Option<&str>,
    phone: Option<&str>,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO clients (name, email, phone) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(phone)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let client_repo = Arc::new(PgClientRepository::new(Arc::new(pool)));
    let client_service = Arc::new(ClientService::new(client_repo));

    AppState::new(client_service)
}
