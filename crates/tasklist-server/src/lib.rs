//! Tasklist HTTP Server Library
//!
//! Provides the REST API, configuration and store bootstrap for the tasklist
//! service.

pub mod api;
pub mod config;
pub mod error;
pub mod store;
