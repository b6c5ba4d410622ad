use serde::{Deserialize, Serialize};

// ============================================================================
// Product Value Objects
// ============================================================================

/// Product record as returned by the products API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock_level: i64,
    pub status: String,
}
