//! Products API error types

use reqwest::StatusCode;
use thiserror::Error;

/// Failure fetching from the products API
#[derive(Debug, Error)]
pub enum ProductApiError {
    /// Transport or decode failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status code
    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Base URL could not be used
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

pub type ProductApiResult<T> = Result<T, ProductApiError>;
