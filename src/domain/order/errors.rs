// ============================================================================
// Order Errors
// ============================================================================

/// Message surfaced to the user when the bulk fetch fails.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to fetch orders.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("{0}")]
    LoadFailure(String),

    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown sort direction: {0}")]
    UnknownSortDirection(String),
}

impl OrderError {
    pub fn load_failure() -> Self {
        OrderError::LoadFailure(LOAD_FAILURE_MESSAGE.to_string())
    }
}
