//! Domain entity for person records
//!
//! A Person is a plain record keyed by its business `document` identifier.
//! The entity carries no surrogate id and no timestamps: the `document` value
//! supplied by the caller is the lookup key for the record's whole lifetime.

use serde::{Deserialize, Serialize};

/// A person record in the registry
///
/// The serde names double as both the wire JSON field names and the stored
/// document field names, so the two representations never drift apart.
///
/// Field rules (enforced by [`crate::person::validate`], not by construction):
/// - `document` is non-blank, unique across the store, and immutable
/// - `first_name`, `last_name`, `phone` and `address` are non-blank
/// - `age` is a positive integer
/// - `email` is non-blank and contains an `@`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique business identifier (e.g. a national ID)
    pub document: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub phone: String,
    pub address: String,
}
