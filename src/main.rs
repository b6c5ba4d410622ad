use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use orders_dashboard::api::ProductClient;
use orders_dashboard::domain::product::{
    categories, filter_products, stock_percentage, ProductCriteria, StockBand,
};
use orders_dashboard::format::{format_currency, format_date};
use orders_dashboard::metrics::Metrics;
use orders_dashboard::{
    Action, DashboardConfig, Order, OrderCommandHandler, OrderId, OrderStatus, SortKey,
    StatusFilter,
};

fn log_view(label: &str, view: &[&Order]) {
    tracing::info!(view = label, count = view.len(), "Order list");
    for order in view {
        tracing::info!(
            order_id = %order.id,
            customer = %order.customer,
            date = %format_date(order.date),
            amount = %format_currency(order.amount),
            status = %order.status,
            "  row"
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Override with RUST_LOG, e.g. RUST_LOG=debug
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,orders_dashboard=debug")),
        )
        .init();

    let config = DashboardConfig::from_env();
    tracing::info!(?config, "Starting orders dashboard");

    let metrics = Arc::new(Metrics::new()?);
    let mut orders = OrderCommandHandler::from_config(&config).with_metrics(metrics.clone());

    // === 1. Load orders ===
    if let Err(e) = orders.load().await {
        // Shown to the user as a notification; the page stays up with no rows.
        tracing::warn!(error = %e, "Order list unavailable");
    }
    log_view("all, newest first", &orders.view());

    // === 2. Search and filter ===
    orders.dispatch(Action::SetSearchTerm("ORD-7352".to_string()));
    log_view("search ORD-7352", &orders.view());

    orders.dispatch(Action::SetSearchTerm(String::new()));
    orders.dispatch(Action::SetStatusFilter(StatusFilter::Only(OrderStatus::Processing)));
    log_view("processing", &orders.view());

    // === 3. Sort by clicking the amount header twice ===
    orders.dispatch(Action::SetStatusFilter(StatusFilter::All));
    orders.toggle_sort(SortKey::Amount);
    orders.toggle_sort(SortKey::Amount);
    log_view("by amount, descending", &orders.view());

    // === 4. Single and bulk status updates ===
    orders
        .change_status(OrderId::new("ORD-7352"), OrderStatus::Cancelled)
        .await;

    orders.dispatch(Action::ToggleSelect(OrderId::new("ORD-7351")));
    orders.dispatch(Action::ToggleSelect(OrderId::new("ORD-7349")));
    let events = orders.bulk_update_selected(OrderStatus::Shipped).await;
    tracing::info!(updated = events.len(), "Bulk update finished");
    orders.dispatch(Action::ClearSelection);

    log_view("after updates", &orders.view());

    // === 5. Products endpoint (opt-in) ===
    if config.fetch_products {
        let client = ProductClient::new(&config)?.with_metrics(metrics.clone());
        match client.get_products().await {
            Ok(products) => {
                tracing::info!(categories = ?categories(&products), "Inventory categories");
                let low_stock = ProductCriteria {
                    status: Some("Low Stock".to_string()),
                    ..Default::default()
                };
                for product in filter_products(&products, &low_stock) {
                    tracing::info!(
                        id = product.id,
                        name = %product.name,
                        category = %product.category,
                        price = %format_currency(product.price),
                        stock_level = product.stock_level,
                        band = ?StockBand::of(product.stock_level),
                        gauge_pct = stock_percentage(product.stock_level),
                        "  low stock product"
                    );
                }
            }
            Err(e) => tracing::warn!(error = %e, "Products unavailable"),
        }
    }

    tracing::debug!(metrics = %metrics.encode_text()?, "Metrics snapshot");
    Ok(())
}
