//! Infrastructure implementations of the domain ports

mod mongo_repository;

pub use mongo_repository::MongoPersonRepository;
