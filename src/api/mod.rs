//! API layer for strlens
//!
//! Validated request types, the string service, response projections and
//! the client-facing error type.
//!
//! # Supported Operations
//!
//! - create (analyze + persist)
//! - get by value
//! - list with query-parameter filters
//! - filter by natural-language phrase
//! - delete by value

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use handler::StringService;
pub use request::{CreateStringRequest, NaturalLanguageParams};
pub use response::{HealthResponse, ListResponse, NaturalLanguageResponse, RecordView};
