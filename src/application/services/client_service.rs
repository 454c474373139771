//! Client resource service.

use std::sync::Arc;

use crate::domain::entities::{Client, ClientUpdate, NewClient};
use crate::domain::repositories::ClientRepository;
use crate::error::AppError;
use serde_json::json;

/// Service implementing the client resource contract.
///
/// Stateless orchestration over a [`ClientRepository`]: each operation is a
/// single store round-trip plus outcome translation. The one rule enforced
/// here is identifier consistency on update — the addressed id must equal
/// the id the payload carries.
pub struct ClientService<R: ClientRepository> {
    repository: Arc<R>,
}

impl<R: ClientRepository> ClientService<R> {
    /// Creates a new client service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all clients in store-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a client by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no client has that id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_client(&self, id: i64) -> Result<Client, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Client not found", json!({ "id": id })))
    }

    /// Creates a new client.
    ///
    /// No uniqueness pre-check is performed — the candidate is forwarded to
    /// the store and the stored row (with its assigned id) is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_client(&self, new_client: NewClient) -> Result<Client, AppError> {
        self.repository.create(new_client).await
    }

    /// Replaces a client's fields wholesale.
    ///
    /// The addressed `id` must equal `candidate.id`; on mismatch the
    /// operation fails before any store call and nothing is written. A
    /// missing row is the store's outcome to report.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IdentifierMismatch`] if `id != candidate.id`.
    /// Returns [`AppError::NotFound`] if no client has that id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_client(&self, id: i64, candidate: ClientUpdate) -> Result<(), AppError> {
        if id != candidate.id {
            return Err(AppError::identifier_mismatch(
                "Path id does not match payload id",
                json!({ "path_id": id, "payload_id": candidate.id }),
            ));
        }

        self.repository.update(candidate).await?;

        Ok(())
    }

    /// Permanently deletes a client.
    ///
    /// The record is resolved first; a second delete of the same id reports
    /// NotFound, not a repeated success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no client has that id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_client(&self, id: i64) -> Result<(), AppError> {
        let client = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Client not found", json!({ "id": id })))?;

        self.repository.delete(client.id).await?;

        Ok(())
    }

    /// Counts stored clients.
    ///
    /// Used by the health probe and the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_clients(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
