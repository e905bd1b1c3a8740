//! # Personas MongoDB Adapter
//!
//! This crate implements the domain `PersonRepository` port against a
//! MongoDB collection. It translates domain storage operations into driver
//! calls and converts driver errors into domain errors, so the domain layer
//! never sees MongoDB types.

pub mod infrastructure;

pub use infrastructure::MongoPersonRepository;
