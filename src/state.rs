//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ClientService;
use crate::infrastructure::persistence::PgClientRepository;

/// Application state shared across all handlers.
///
/// Wired once at startup; handlers reach the service layer through it and
/// hold no other shared resources.
#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<ClientService<PgClientRepository>>,
}

impl AppState {
    /// Creates application state from the wired service layer.
    pub fn new(client_service: Arc<ClientService<PgClientRepository>>) -> Self {
        Self { client_service }
    }
}
