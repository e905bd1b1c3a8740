//! Domain errors for person operations
//!
//! This module defines all possible errors that can occur while creating,
//! reading, updating or deleting person records. These are domain-level
//! errors that abstract away infrastructure details.
//!
//! The message strings are part of the service contract: HTTP clients see
//! them verbatim, so they must stay stable.

use thiserror::Error;

/// Errors that can occur during person operations
///
/// These errors represent business-level failures and are independent of
/// infrastructure implementation details (e.g., no MongoDB driver error
/// types here).
#[derive(Error, Debug)]
pub enum PersonError {
    /// The `document` field is blank
    #[error("document must not be empty")]
    EmptyDocument,

    /// The `first_name` field is blank
    #[error("first name must not be empty")]
    EmptyFirstName,

    /// The `last_name` field is blank
    #[error("last name must not be empty")]
    EmptyLastName,

    /// The `age` field is zero or negative
    #[error("age must be a positive integer")]
    InvalidAge,

    /// The `email` field is blank or does not contain an `@`
    #[error("email is invalid")]
    InvalidEmail,

    /// The `phone` field is blank
    #[error("phone must not be empty")]
    EmptyPhone,

    /// The `address` field is blank
    #[error("address must not be empty")]
    EmptyAddress,

    /// A person with the same document already exists
    #[error("a person with this document already exists")]
    DuplicateDocument,

    /// A lookup key (path parameter) is blank
    #[error("the document must not be empty")]
    EmptyDocumentKey,

    /// An update tried to change the document of an existing person
    #[error("the document of a person cannot be changed")]
    ImmutableDocument,

    /// No person matches the given document
    ///
    /// The storage adapter reports this distinctly from [`PersonError::Storage`];
    /// the service relies on being able to tell the two apart.
    #[error("person not found")]
    NotFound,

    /// The storage backend failed (timeout, connectivity loss, driver fault)
    #[error("storage operation failed: {0}")]
    Storage(String),
}

impl PersonError {
    /// Create a storage failure error with a message
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Result type alias for person operations
pub type Result<T> = std::result::Result<T, PersonError>;
