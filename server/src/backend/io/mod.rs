//! # IO Module
//!
//! Provides the interface layer between HTTP clients and the domain logic.
//!
//! This module translates requests into domain commands and domain results
//! into responses. It owns the communication protocol (REST over JSON) and
//! the boundary between transport concerns and business rules.
//!
//! ## Current Implementation
//!
//! - **Web Framework**: Axum for async HTTP handling
//! - **Serialization**: Serde for JSON serialization/deserialization
//! - **State Management**: Axum `State` extractor for service injection
//! - **Error Handling**: Domain errors map to status codes in `rest::errors`
//!
//! ## Supported Operations
//!
//! - **GET /api/accounts**, **GET /api/accounts/:id**: read accounts
//! - **POST /api/accounts**: create an account
//! - **PUT /api/accounts/:id**: rename an account
//! - **DELETE /api/accounts/:id**: delete an account
//! - **PUT /api/withdraw**, **PUT /api/deposit**, **PUT /api/transfer**: move money

pub mod rest;

pub use rest::account_apis::*;
pub use rest::health_apis::*;
pub use rest::ledger_apis::*;
