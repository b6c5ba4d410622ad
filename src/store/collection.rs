use std::collections::BTreeMap;

use crate::domain::order::{Order, OrderCommand, OrderEvent, OrderId, OrderStatus};

// ============================================================================
// Order Collection - orders keyed by id
// ============================================================================
//
// Orders are only ever replaced wholesale (after a fetch) or have their
// status changed. Enumeration is by id so tie order in views is stable.
//
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderCollection {
    orders: BTreeMap<OrderId, Order>,
}

impl OrderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a fetched list by id. A later duplicate id replaces an earlier one.
    pub fn from_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let orders = orders
            .into_iter()
            .map(|order| (order.id.clone(), order))
            .collect();
        Self { orders }
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn contains(&self, id: &OrderId) -> bool {
        self.orders.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Turn a command into the events it produces. Unknown ids produce nothing.
    pub fn handle_command(&self, command: &OrderCommand) -> Vec<OrderEvent> {
        match command {
            OrderCommand::SetStatus { order_id, status } => self
                .status_change(order_id, *status)
                .into_iter()
                .collect(),
            OrderCommand::SetStatusBulk { order_ids, status } => order_ids
                .iter()
                .filter_map(|id| self.status_change(id, *status))
                .collect(),
        }
    }

    fn status_change(&self, id: &OrderId, status: OrderStatus) -> Option<OrderEvent> {
        match self.orders.get(id) {
            Some(order) => Some(order.status_change(status)),
            None => {
                tracing::debug!(order_id = %id, status = %status, "Status update skipped, unknown order");
                None
            }
        }
    }

    /// Apply an event. Returns the previous status, or `None` if the order is gone.
    pub fn apply_event(&mut self, event: &OrderEvent) -> Option<OrderStatus> {
        let order = self.orders.get_mut(event.order_id())?;
        Some(order.apply_event(event))
    }

    /// Set one order's status. `None` means the id was absent and nothing changed.
    pub fn set_status(&mut self, id: &OrderId, status: OrderStatus) -> Option<OrderStatus> {
        let event = self.status_change(id, status)?;
        self.apply_event(&event)
    }

    /// Set the status of every listed order that exists. Returns how many were updated.
    pub fn set_status_bulk<'a>(
        &mut self,
        ids: impl IntoIterator<Item = &'a OrderId>,
        status: OrderStatus,
    ) -> usize {
        ids.into_iter()
            .filter(|id| self.set_status(id, status).is_some())
            .count()
    }
}
