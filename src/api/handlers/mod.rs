//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clients;
pub mod health;

pub use clients::{
    client_list_handler, create_client_handler, delete_client_handler, get_client_handler,
    update_client_handler,
};
pub use health::health_handler;
