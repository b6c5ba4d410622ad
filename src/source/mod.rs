// ============================================================================
// Order Sources
// ============================================================================
//
// Where the bulk order fetch gets its data. The only implementation is the
// simulated one over the seed list.
//
// ============================================================================

mod seed;

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::order::{Order, OrderError};

pub use seed::seed_orders;

#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch the full order list.
    async fn fetch_all(&self) -> Result<Vec<Order>, OrderError>;
}

/// Serves the seed list after a fixed delay, or fails after it when
/// configured to take the failure path. Never retries.
#[derive(Debug, Clone)]
pub struct SimulatedOrderSource {
    delay: Duration,
    fail: bool,
}

impl SimulatedOrderSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }
}

#[async_trait]
impl OrderSource for SimulatedOrderSource {
    async fn fetch_all(&self) -> Result<Vec<Order>, OrderError> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Simulating order fetch");
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(OrderError::load_failure());
        }
        Ok(seed_orders())
    }
}
