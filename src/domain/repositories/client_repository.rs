//! Repository trait for client data access.

use crate::domain::entities::{Client, ClientUpdate, NewClient};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the client store.
///
/// Provides keyed lookup, insert, wholesale update, and delete for client
/// records. Ordering of listings is store-defined; callers must not rely
/// on it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClientRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_client.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Inserts a new client and returns the stored row with its assigned id.
    ///
    /// No uniqueness pre-check is performed here; ids come from the store's
    /// own sequence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_client: NewClient) -> Result<Client, AppError>;

    /// Finds a client by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Client))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, AppError>;

    /// Lists all clients in store-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Client>, AppError>;

    /// Counts stored clients.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Replaces a client's fields wholesale.
    ///
    /// Every payload field of the addressed row is overwritten with the
    /// values in [`ClientUpdate`]; absent optional fields clear the stored
    /// values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no client matches `update.id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, update: ClientUpdate) -> Result<Client, AppError>;

    /// Permanently removes a client by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no row
    /// matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
