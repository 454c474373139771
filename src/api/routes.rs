//! API route configuration.

use crate::api::handlers::{
    client_list_handler, create_client_handler, delete_client_handler, get_client_handler,
    update_client_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All client resource routes.
///
/// # Endpoints
///
/// - `GET    /clients`        - List all clients
/// - `POST   /clients`        - Create a client
/// - `GET    /clients/{id}`   - Retrieve a client
/// - `PUT    /clients/{id}`   - Replace a client's fields wholesale
/// - `DELETE /clients/{id}`   - Permanently delete a client
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clients",
            get(client_list_handler).post(create_client_handler),
        )
        .route(
            "/clients/{id}",
            get(get_client_handler)
                .put(update_client_handler)
                .delete(delete_client_handler),
        )
}
