use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::events::{OrderEvent, OrderStatusChanged};
use super::value_objects::{OrderId, OrderItem, OrderStatus};

// ============================================================================
// Order - the record shown in the order list
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    // Identity
    pub id: OrderId,

    pub customer: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub status: OrderStatus,

    /// Informational only; never reconciled against `amount`.
    pub items: Vec<OrderItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Order {
    /// Case-insensitive substring match against id or customer.
    /// An empty term matches every order.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.id.as_str().to_lowercase().contains(&needle)
            || self.customer.to_lowercase().contains(&needle)
    }

    /// Event describing a move to `status`.
    pub fn status_change(&self, status: OrderStatus) -> OrderEvent {
        OrderEvent::StatusChanged(OrderStatusChanged {
            order_id: self.id.clone(),
            from: self.status,
            to: status,
        })
    }

    /// Apply an event addressed to this order. Returns the previous status.
    pub fn apply_event(&mut self, event: &OrderEvent) -> OrderStatus {
        match event {
            OrderEvent::StatusChanged(e) => {
                let previous = self.status;
                self.status = e.to;
                previous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Order {
        Order {
            id: OrderId::new("ORD-7351"),
            customer: "Michael Chen".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 4).unwrap(),
            amount: 329.98,
            status: OrderStatus::Processing,
            items: vec![OrderItem {
                product_id: 1,
                name: "Premium Wireless Headphones".to_string(),
                quantity: 1,
                price: 299.99,
            }],
            email: None,
        }
    }

    #[test]
    fn test_matches_search_on_id_and_customer() {
        let order = sample();
        assert!(order.matches_search(""));
        assert!(order.matches_search("ord-73"));
        assert!(order.matches_search("CHEN"));
        assert!(!order.matches_search("Emma"));
    }

    #[test]
    fn test_apply_status_change_keeps_other_fields() {
        let mut order = sample();
        let before = order.clone();
        let event = order.status_change(OrderStatus::Cancelled);

        let previous = order.apply_event(&event);

        assert_eq!(previous, OrderStatus::Processing);
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert_eq!(order.amount, before.amount);
        assert_eq!(order.items, before.items);
        assert_eq!(order.date, before.date);
    }

    #[test]
    fn test_order_wire_format() {
        let json = r#"{
            "id": "ORD-7352",
            "customer": "Emma Thompson",
            "date": "2023-10-05",
            "amount": 899.99,
            "status": "Delivered",
            "items": []
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.id, OrderId::new("ORD-7352"));
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.email, None);

        let out = serde_json::to_value(&order).unwrap();
        assert!(out.get("email").is_none());
        assert_eq!(out["date"], "2023-10-05");
    }
}
