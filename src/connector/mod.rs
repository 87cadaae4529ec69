//! # Connector Layer
//!
//! Infrastructure implementing and exposing the application layer:
//! - In-memory record stores
//! - HTTP transport (axum) with OpenAPI description and Swagger UI
//! - HTTP client (reqwest) for talking to a running server
//! - CLI command routing

pub mod adapter;
pub mod api;
pub mod client;
pub mod http;

pub use adapter::*;
pub use client::*;
