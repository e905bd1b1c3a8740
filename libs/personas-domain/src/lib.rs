//! # Personas Domain Layer
//!
//! This crate contains the business rules for the Personas person-registry
//! microservice. It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (Person)
//! - **Ports**: Trait definitions for external dependencies (PersonRepository)
//! - **Services**: Business logic orchestration
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (MongoDB, HTTP,
//! etc.). All external dependencies are expressed as traits (ports) that are
//! implemented by adapter layers.
//!
//! ## Example
//!
//! ```rust
//! use personas_domain::{Person, PersonService};
//! use personas_domain::ports::PersonRepository;
//!
//! // The service is generic over any PersonRepository implementation
//! async fn example<R: PersonRepository>(service: PersonService<R>) {
//!     let people = service.list().await.unwrap();
//!     println!("{} people registered", people.len());
//! }
//! ```

pub mod person;
pub mod ports;

// Re-export commonly used types
pub use person::{Person, PersonError, PersonService};
pub use ports::PersonRepository;
