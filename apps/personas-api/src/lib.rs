//! Personas API - person registry service
//!
//! HTTP service exposing CRUD endpoints for person records stored in
//! MongoDB. Handlers decode wire payloads, call the domain service, and map
//! domain errors to transport status codes.

pub mod dto;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use personas_domain::{PersonRepository, PersonService};

/// Application state shared across handlers
///
/// Generic over the repository so the HTTP layer can be driven against an
/// in-memory implementation in tests, through the same seam production uses
/// to inject the MongoDB adapter.
pub struct AppState<R> {
    pub person_service: Arc<PersonService<R>>,
}

impl<R: PersonRepository> AppState<R> {
    /// Wrap a person service for sharing across handlers
    pub fn new(service: PersonService<R>) -> Self {
        Self {
            person_service: Arc::new(service),
        }
    }
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            person_service: Arc::clone(&self.person_service),
        }
    }
}
