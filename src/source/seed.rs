use chrono::NaiveDate;

use crate::domain::order::{Order, OrderId, OrderItem, OrderStatus};

// ============================================================================
// Seed Data - the fixed order list served by the simulated fetch
// ============================================================================

fn item(product_id: u32, name: &str, quantity: u32, price: f64) -> OrderItem {
    OrderItem {
        product_id,
        name: name.to_string(),
        quantity,
        price,
    }
}

fn order(
    id: &str,
    customer: &str,
    (y, m, d): (i32, u32, u32),
    amount: f64,
    status: OrderStatus,
    items: Vec<OrderItem>,
) -> Order {
    Order {
        id: OrderId::new(id),
        customer: customer.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        amount,
        status,
        items,
        email: None,
    }
}

pub fn seed_orders() -> Vec<Order> {
    use OrderStatus::*;

    const TV: &str = "Ultra HD Smart TV 55\"";
    const HEADPHONES: &str = "Premium Wireless Headphones";
    const CHARGER: &str = "Wireless Charging Pad";
    const BLENDER: &str = "Professional Blender";

    vec![
        order("ORD-7352", "Emma Thompson", (2023, 10, 5), 899.99, Delivered, vec![
            item(2, TV, 1, 899.99),
        ]),
        order("ORD-7351", "Michael Chen", (2023, 10, 4), 329.98, Processing, vec![
            item(1, HEADPHONES, 1, 299.99),
            item(8, CHARGER, 1, 49.99),
        ]),
        order("ORD-7350", "Sofia Rodriguez", (2023, 10, 4), 179.99, Shipped, vec![
            item(4, BLENDER, 1, 179.99),
        ]),
        order("ORD-7349", "James Wilson", (2023, 10, 3), 999.99, Processing, vec![
            item(7, "Smartphone - Latest Model", 1, 999.99),
        ]),
        order("ORD-7348", "Olivia Kim", (2023, 10, 3), 549.98, Delivered, vec![
            item(3, "Designer Watch - Limited Edition", 1, 459.99),
            item(6, "Luxury Fountain Pen", 1, 89.99),
        ]),
        order("ORD-7347", "Noah Martinez", (2023, 10, 2), 379.98, Shipped, vec![
            item(4, BLENDER, 1, 179.99),
            item(9, "Fitness Tracker", 1, 129.99),
            item(8, CHARGER, 1, 49.99),
        ]),
        order("ORD-7346", "Ava Johnson", (2023, 10, 1), 249.99, Delivered, vec![
            item(5, "Ergonomic Office Chair", 1, 249.99),
        ]),
        order("ORD-7345", "Ethan Brown", (2023, 9, 30), 299.99, Delivered, vec![
            item(1, HEADPHONES, 1, 299.99),
        ]),
        order("ORD-7344", "Isabella Garcia", (2023, 9, 29), 179.99, Cancelled, vec![
            item(4, BLENDER, 1, 179.99),
        ]),
        order("ORD-7343", "William Taylor", (2023, 9, 28), 1799.98, Delivered, vec![
            item(2, TV, 2, 1799.98),
        ]),
    ]
}
