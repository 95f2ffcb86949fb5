//! # Lagerhof Backend Library
//!
//! Core library for Lagerhof, a warehouse/logistics management backend with a
//! REST API interface. The two load-bearing subsystems are the hierarchical
//! geographic resolver (country → province → locality, resolved or created
//! atomically inside one transaction) and the relation-count reporting engine
//! (child rows per parent entity, e.g. sellers per locality).
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: HTTP server and routing
//! - **SQLx**: Asynchronous database operations with SQLite
//! - **Tokio**: Async runtime
//! - **Serde**: Serialization/deserialization for JSON APIs
//!
//! ## Core Components
//!
//! - [`config`]: Application configuration management
//! - [`db`]: Database schema initialization
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`geo`]: Transactional country/province/locality resolution cascade
//! - [`metrics`]: Operational counters
//! - [`reports`]: Relation counter and report assembler
//! - [`routes`]: HTTP API endpoint handlers
//! - [`state`]: Shared application state
//! - [`types`]: Data transfer objects

pub mod config;
pub mod db;
pub mod error;
pub mod geo;
pub mod metrics;
pub mod reports;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
