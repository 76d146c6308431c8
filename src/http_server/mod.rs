//! # strlens HTTP Server Module
//!
//! Axum server exposing the string analysis API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `POST /strings` - Analyze and store a string
//! - `GET /strings` - List with query filters
//! - `GET /strings/filter-by-natural-language` - List by phrase
//! - `GET /strings/:value` - Fetch one string
//! - `DELETE /strings/:value/delete` - Delete one string

pub mod config;
pub mod observability_routes;
pub mod server;
pub mod string_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
