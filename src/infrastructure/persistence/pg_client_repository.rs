//! PostgreSQL implementation of client repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Client, ClientUpdate, NewClient};
use crate::domain::repositories::ClientRepository;
use crate::error::AppError;

/// Database row shape for the `clients` table.
#[derive(sqlx::FromRow)]
struct ClientRow {
    id: i64,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ClientRow> for Client {
    fn from(r: ClientRow) -> Self {
        Client::new(r.id, r.name, r.email, r.phone, r.created_at, r.updated_at)
    }
}

/// PostgreSQL repository for client storage and retrieval.
///
/// Uses SQLx parameterized queries for SQL injection protection.
pub struct PgClientRepository {
    pool: Arc<PgPool>,
}

impl PgClientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn create(&self, new_client: NewClient) -> Result<Client, AppError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            INSERT INTO clients (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, phone, created_at, updated_at
            "#,
        )
        .bind(new_client.name)
        .bind(new_client.email)
        .bind(new_client.phone)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, email, phone, created_at, updated_at
            FROM clients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Client::from))
    }

    async fn list(&self) -> Result<Vec<Client>, AppError> {
        let rows = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT id, name, email, phone, created_at, updated_at
            FROM clients
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, update: ClientUpdate) -> Result<Client, AppError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
            UPDATE clients
            SET name = $2, email = $3, phone = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, phone, created_at, updated_at
            "#,
        )
        .bind(update.id)
        .bind(update.name)
        .bind(update.email)
        .bind(update.phone)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Client::from).ok_or_else(|| {
            AppError::not_found(
                "Client not found",
                serde_json::json!({ "id": update.id }),
            )
        })
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
