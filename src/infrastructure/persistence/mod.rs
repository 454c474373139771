//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! parameterized queries.
//!
//! # Repositories
//!
//! - [`PgClientRepository`] - Client storage and retrieval

pub mod pg_client_repository;

pub use pg_client_repository::PgClientRepository;
