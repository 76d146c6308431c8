//! strlens - string analysis service
//!
//! Computes structural properties of submitted strings, stores them, and
//! serves them back filtered by query parameters or by a small
//! natural-language phrase.

pub mod analyzer;
pub mod api;
pub mod cli;
pub mod filter;
pub mod http_server;
pub mod interpreter;
pub mod observability;
pub mod store;
