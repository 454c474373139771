//! Business logic services for the application layer.

pub mod client_service;

pub use client_service::ClientService;
