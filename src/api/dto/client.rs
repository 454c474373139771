//! DTOs for client management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/clients`.
///
/// Any `id` supplied by the caller is ignored — the store assigns one.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    /// Display name of the client.
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Contact e-mail address.
    #[validate(email(message = "Invalid e-mail address"))]
    pub email: Option<String>,

    /// Contact phone number. Normalized before storage.
    pub phone: Option<String>,
}

/// Request body for `PUT /api/clients/{id}`.
///
/// A full replacement: every stored payload field takes the value given
/// here, and absent optional fields are cleared. The `id` must match the
/// path parameter.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientRequest {
    pub id: i64,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid e-mail address"))]
    pub email: Option<String>,

    pub phone: Option<String>,
}

/// Individual client information.
#[derive(Debug, Serialize)]
pub struct ClientItem {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response containing list of clients.
#[derive(Debug, Serialize)]
pub struct ClientListResponse {
    pub items: Vec<ClientItem>,
}
