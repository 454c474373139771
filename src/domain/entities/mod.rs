//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Client`] - A client directory record
//!
//! # Design Pattern
//!
//! Entities are plain data structures with separate shapes per operation:
//! - `NewClient` - For creating new records (no id; the store assigns one)
//! - `ClientUpdate` - For wholesale replacement (carries its own id)

pub mod client;

pub use client::{Client, ClientUpdate, NewClient};
