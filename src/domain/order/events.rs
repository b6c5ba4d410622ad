use serde::{Deserialize, Serialize};

use super::value_objects::{OrderId, OrderStatus};

// ============================================================================
// Order Events - Facts produced by handling an OrderCommand
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    StatusChanged(OrderStatusChanged),
}

impl OrderEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::StatusChanged(_) => "OrderStatusChanged",
        }
    }

    pub fn order_id(&self) -> &OrderId {
        match self {
            OrderEvent::StatusChanged(e) => &e.order_id,
        }
    }
}

/// Status moved from `from` to `to`. Also emitted when both are equal.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderStatusChanged {
    pub order_id: OrderId,
    pub from: OrderStatus,
    pub to: OrderStatus,
}
