use super::value_objects::{OrderId, OrderStatus};

// ============================================================================
// Order Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum OrderCommand {
    SetStatus {
        order_id: OrderId,
        status: OrderStatus,
    },
    /// Applied id by id; ids missing from the collection are skipped.
    SetStatusBulk {
        order_ids: Vec<OrderId>,
        status: OrderStatus,
    },
}
