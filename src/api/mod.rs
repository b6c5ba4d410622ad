//! Remote API clients

mod error;
mod products;

pub use error::{ProductApiError, ProductApiResult};
pub use products::ProductClient;
