//! Request handlers

pub mod person;
