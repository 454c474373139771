//! Client entity representing a directory record.

use chrono::{DateTime, Utc};

/// A client record with contact details.
///
/// The service layer treats `name`, `email`, and `phone` as opaque payload;
/// only `id` participates in business rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Creates a new Client instance.
    pub fn new(
        id: i64,
        name: String,
        email: Option<String>,
        phone: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new client.
///
/// Carries no `id` — the store assigns one on insert.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Wholesale replacement of a client's fields.
///
/// Carries its own `id`, which must match the addressed record. All payload
/// fields overwrite the stored values; absent optional fields clear them.
#[derive(Debug, Clone)]
pub struct ClientUpdate {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}
