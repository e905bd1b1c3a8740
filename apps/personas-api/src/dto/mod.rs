//! DTOs for the HTTP API

pub mod person;
