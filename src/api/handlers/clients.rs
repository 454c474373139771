//! Handlers for client management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::client::{
    ClientItem, ClientListResponse, CreateClientRequest, UpdateClientRequest,
};
use crate::domain::entities::{Client, ClientUpdate, NewClient};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::phone::normalize_phone;

fn client_to_item(c: Client) -> ClientItem {
    ClientItem {
        id: c.id,
        name: c.name,
        email: c.email,
        phone: c.phone,
        created_at: c.created_at,
        updated_at: c.updated_at,
    }
}

/// Normalizes an optional phone field, rejecting malformed input.
fn normalize_optional_phone(phone: Option<String>) -> Result<Option<String>, AppError> {
    phone
        .map(|p| {
            normalize_phone(&p).map_err(|e| {
                AppError::bad_request("Invalid phone number", json!({ "reason": e.to_string() }))
            })
        })
        .transpose()
}

/// Lists all clients.
///
/// # Endpoint
///
/// `GET /api/clients`
pub async fn client_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ClientListResponse>, AppError> {
    let all_clients = state.client_service.list_clients().await?;

    Ok(Json(ClientListResponse {
        items: all_clients.into_iter().map(client_to_item).collect(),
    }))
}

/// Retrieves a single client by id.
///
/// # Endpoint
///
/// `GET /api/clients/{id}`
///
/// # Errors
///
/// Returns 404 if no client has the given id.
pub async fn get_client_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ClientItem>, AppError> {
    let client = state.client_service.get_client(id).await?;

    Ok(Json(client_to_item(client)))
}

/// Creates a new client.
///
/// # Endpoint
///
/// `POST /api/clients`
///
/// Responds with `201 Created`, the stored record (including its assigned
/// id), and a `Location` header pointing at the new resource.
///
/// # Errors
///
/// Returns 400 if payload validation fails.
pub async fn create_client_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ClientItem>), AppError> {
    payload.validate()?;

    let phone = normalize_optional_phone(payload.phone)?;

    let client = state
        .client_service
        .create_client(NewClient {
            name: payload.name,
            email: payload.email,
            phone,
        })
        .await?;

    let location = format!("/api/clients/{}", client.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(client_to_item(client)),
    ))
}

/// Replaces a client's fields wholesale.
///
/// # Endpoint
///
/// `PUT /api/clients/{id}`
///
/// The payload must carry the same `id` as the path; a mismatch is rejected
/// with 400 before anything is written. On success the response is empty.
///
/// # Errors
///
/// Returns 400 if the payload id differs from the path id.
/// Returns 400 if payload validation fails.
/// Returns 404 if no client has the given id.
pub async fn update_client_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    let phone = normalize_optional_phone(payload.phone)?;

    let candidate = ClientUpdate {
        id: payload.id,
        name: payload.name,
        email: payload.email,
        phone,
    };

    state.client_service.update_client(id, candidate).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Permanently deletes a client.
///
/// # Endpoint
///
/// `DELETE /api/clients/{id}`
///
/// # Errors
///
/// Returns 404 if no client has the given id, including repeat deletes.
pub async fn delete_client_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.client_service.delete_client(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
