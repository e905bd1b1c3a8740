//! Person domain module
//!
//! This module contains the core business rules for person records: the
//! entity itself, the domain error taxonomy, and the service that validates
//! input and orchestrates storage access.

mod entity;
mod error;
mod service;

pub use entity::Person;
pub use error::{PersonError, Result};
pub use service::{validate, PersonService};
