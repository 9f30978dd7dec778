//! In-process storage backend. Records live for the lifetime of the server.

pub mod account_repository;

pub use account_repository::InMemoryAccountRepository;
