//! Repository trait definitions for the domain layer.
//!
//! Traits here abstract data access following the Repository pattern.
//! Concrete implementations live in `crate::infrastructure::persistence`;
//! mock implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ClientRepository`] - Client record CRUD operations
//!
//! # Testing
//!
//! See integration tests in `tests/repository_client.rs` for usage examples.

pub mod client_repository;

pub use client_repository::ClientRepository;

#[cfg(test)]
pub use client_repository::MockClientRepository;
