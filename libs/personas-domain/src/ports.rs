//! Ports (trait definitions) for external dependencies
//!
//! This module defines the contracts (ports) that external adapters must
//! implement. Following hexagonal architecture, the domain defines what it
//! needs, and the infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::future::Future;

use crate::person::{Person, PersonError};

/// Port for person storage operations
///
/// This trait abstracts away the storage backend (MongoDB, in-memory, etc.).
/// Every operation is scoped to a single person by its business `document`
/// key, except [`PersonRepository::find_all`]. Implementations must:
/// - Bound each call with a short timeout
/// - Convert infrastructure errors to [`PersonError::Storage`]
/// - Report a missing record from [`PersonRepository::find_by_document`] as
///   [`PersonError::NotFound`], distinct from any other fault
pub trait PersonRepository: Send + Sync {
    /// Persist a new person record
    ///
    /// # Errors
    ///
    /// Returns [`PersonError::Storage`] if the storage operation fails
    fn insert(&self, person: &Person) -> impl Future<Output = Result<(), PersonError>> + Send;

    /// Retrieve every person record in the store
    ///
    /// # Errors
    ///
    /// Returns [`PersonError::Storage`] if the storage operation fails
    fn find_all(&self) -> impl Future<Output = Result<Vec<Person>, PersonError>> + Send;

    /// Retrieve the person matching the given document
    ///
    /// # Errors
    ///
    /// - [`PersonError::NotFound`] when no record matches the document
    /// - [`PersonError::Storage`] for any other fault
    fn find_by_document(
        &self,
        document: &str,
    ) -> impl Future<Output = Result<Person, PersonError>> + Send;

    /// Replace the fields of the person matching the given document
    ///
    /// A call that matches no record still succeeds as a no-op; callers that
    /// care about existence must check it first.
    ///
    /// # Errors
    ///
    /// Returns [`PersonError::Storage`] if the storage operation fails
    fn update(
        &self,
        document: &str,
        person: &Person,
    ) -> impl Future<Output = Result<(), PersonError>> + Send;

    /// Remove the person matching the given document
    ///
    /// # Errors
    ///
    /// Returns [`PersonError::Storage`] if the storage operation fails
    fn delete(&self, document: &str) -> impl Future<Output = Result<(), PersonError>> + Send;
}
