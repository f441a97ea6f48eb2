use thiserror::Error;

pub mod catalog;
pub mod query;
pub mod search;
pub mod stats;
pub mod tools;
pub mod tools_page;

/// Result type returned by service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced to the route layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// One of the catalog record sets could not be read.
    #[error("catalog store unavailable: {0}")]
    StoreUnavailable(String),
    /// Request parameters failed validation.
    #[error("{0}")]
    Form(String),
}
