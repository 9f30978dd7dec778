//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the account ledger.
//! This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Mapping between shared DTOs and domain commands
//! - Error translation from domain to HTTP status codes
//! - Request logging
//!
//! ## Design Principles
//!
//! - **Domain Separation**: Pure translation layer without business logic
//! - **Error Transparency**: Plain-text error messages with a status code per
//!   error kind

// Module declarations
pub mod account_apis;
pub mod errors;
pub mod health_apis;
pub mod ledger_apis;
pub mod mappers;
