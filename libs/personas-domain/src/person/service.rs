//! Person service - business rule validation and orchestration
//!
//! This module contains the core business logic for the person registry.
//! The service validates input, enforces the uniqueness and immutability of
//! the `document` key, and coordinates with the storage port.

use super::{Person, PersonError};
use crate::ports::PersonRepository;

/// Check every field rule of a person record
///
/// Rules are evaluated in a fixed order and the first failure wins, so a
/// record violating several rules reports only the earliest one. Callers and
/// tests depend on which single error surfaces, which makes the ordering part
/// of the contract:
///
/// 1. blank `document`
/// 2. blank `first_name`
/// 3. blank `last_name`
/// 4. non-positive `age`
/// 5. blank `email`, or `email` without an `@`
/// 6. blank `phone`
/// 7. blank `address`
///
/// "Blank" means empty after trimming whitespace.
pub fn validate(person: &Person) -> Result<(), PersonError> {
    if person.document.trim().is_empty() {
        return Err(PersonError::EmptyDocument);
    }
    if person.first_name.trim().is_empty() {
        return Err(PersonError::EmptyFirstName);
    }
    if person.last_name.trim().is_empty() {
        return Err(PersonError::EmptyLastName);
    }
    if person.age <= 0 {
        return Err(PersonError::InvalidAge);
    }
    if person.email.trim().is_empty() || !person.email.contains('@') {
        return Err(PersonError::InvalidEmail);
    }
    if person.phone.trim().is_empty() {
        return Err(PersonError::EmptyPhone);
    }
    if person.address.trim().is_empty() {
        return Err(PersonError::EmptyAddress);
    }

    Ok(())
}

/// Service for managing person records
///
/// This service encapsulates the business rules of the registry:
/// - Validates every field before a create or update is persisted
/// - Rejects creation when the document is already taken
/// - Rejects updates that would change a person's document
/// - Checks existence before updating or deleting
///
/// It holds no state beyond the injected repository, so concurrent requests
/// need no mutual exclusion at this layer.
///
/// ## Static Dispatch
///
/// The service is generic over any `PersonRepository` implementation.
/// The compiler will generate specialized versions for each concrete type,
/// resulting in zero-cost abstractions.
pub struct PersonService<R> {
    repository: R,
}

impl<R> PersonService<R>
where
    R: PersonRepository,
{
    /// Create a new PersonService with the given repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Register a new person
    ///
    /// Validates the record, then probes the store for an existing person
    /// with the same document before inserting. Only a successful probe
    /// blocks the insert: a probe failure of any kind (not just a missing
    /// record) counts as "document free".
    ///
    /// # Errors
    ///
    /// - A validation error for the first field rule the record violates
    /// - [`PersonError::DuplicateDocument`] if the document is already taken
    /// - [`PersonError::Storage`] if the insert fails
    pub async fn create(&self, person: Person) -> Result<(), PersonError> {
        validate(&person)?;

        if self
            .repository
            .find_by_document(&person.document)
            .await
            .is_ok()
        {
            return Err(PersonError::DuplicateDocument);
        }

        self.repository.insert(&person).await
    }

    /// List every registered person
    ///
    /// # Errors
    ///
    /// Returns [`PersonError::Storage`] if the listing fails
    pub async fn list(&self) -> Result<Vec<Person>, PersonError> {
        self.repository.find_all().await
    }

    /// Look up a person by document
    ///
    /// # Errors
    ///
    /// - [`PersonError::EmptyDocumentKey`] if the document is blank
    /// - [`PersonError::NotFound`] if no person matches
    /// - [`PersonError::Storage`] for any other storage fault
    pub async fn get_by_document(&self, document: &str) -> Result<Person, PersonError> {
        if document.trim().is_empty() {
            return Err(PersonError::EmptyDocumentKey);
        }

        self.repository.find_by_document(document).await
    }

    /// Update the person matching the given document
    ///
    /// Existence is checked before key immutability: when the target is
    /// missing AND the payload carries a different document, the caller sees
    /// [`PersonError::NotFound`].
    ///
    /// # Errors
    ///
    /// - [`PersonError::EmptyDocumentKey`] if the document is blank
    /// - A validation error for the first field rule the record violates
    /// - [`PersonError::NotFound`] if no person matches
    /// - [`PersonError::ImmutableDocument`] if the payload changes the document
    /// - [`PersonError::Storage`] for any other storage fault
    pub async fn update(&self, document: &str, person: Person) -> Result<(), PersonError> {
        if document.trim().is_empty() {
            return Err(PersonError::EmptyDocumentKey);
        }

        validate(&person)?;

        self.repository.find_by_document(document).await?;

        if person.document != document {
            return Err(PersonError::ImmutableDocument);
        }

        self.repository.update(document, &person).await
    }

    /// Remove the person matching the given document
    ///
    /// # Errors
    ///
    /// - [`PersonError::EmptyDocumentKey`] if the document is blank
    /// - [`PersonError::NotFound`] if no person matches
    /// - [`PersonError::Storage`] for any other storage fault
    pub async fn delete(&self, document: &str) -> Result<(), PersonError> {
        if document.trim().is_empty() {
            return Err(PersonError::EmptyDocumentKey);
        }

        self.repository.find_by_document(document).await?;

        self.repository.delete(document).await
    }
}
