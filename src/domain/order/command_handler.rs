use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::DashboardConfig;
use crate::metrics::Metrics;
use crate::source::{OrderSource, SimulatedOrderSource};
use crate::store::{Action, OrdersState, SortKey};

use super::aggregate::Order;
use super::commands::OrderCommand;
use super::errors::OrderError;
use super::events::OrderEvent;
use super::value_objects::{OrderId, OrderStatus};

// ============================================================================
// Order Command Handler
// ============================================================================
//
// Orchestrates: Source → Actions → OrdersState, with the simulated latency
// of the order page. One caller drives it at a time (`&mut self`).
//
// ============================================================================

pub struct OrderCommandHandler {
    source: Arc<dyn OrderSource>,
    state: OrdersState,
    update_delay: Duration,
    metrics: Option<Arc<Metrics>>,
}

impl OrderCommandHandler {
    pub fn new(source: Arc<dyn OrderSource>, update_delay: Duration) -> Self {
        Self {
            source,
            state: OrdersState::new(),
            update_delay,
            metrics: None,
        }
    }

    /// Handler over the simulated seed source described by `config`.
    pub fn from_config(config: &DashboardConfig) -> Self {
        let source = if config.simulate_load_failure {
            SimulatedOrderSource::failing(config.fetch_delay)
        } else {
            SimulatedOrderSource::new(config.fetch_delay)
        };
        Self::new(Arc::new(source), config.update_delay)
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn state(&self) -> &OrdersState {
        &self.state
    }

    /// Forward a UI event to the state.
    pub fn dispatch(&mut self, action: Action) -> Vec<OrderEvent> {
        self.state.dispatch(action)
    }

    /// Column header click.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.state.toggle_sort(key);
    }

    /// Header checkbox over the current view.
    pub fn toggle_select_all(&mut self) {
        self.record_view_derivation();
        self.state.toggle_select_all();
    }

    /// Current derived view.
    pub fn view(&self) -> Vec<&Order> {
        self.record_view_derivation();
        self.state.view()
    }

    // Counts views derived through this handler; direct `state().view()` calls are not seen.
    fn record_view_derivation(&self) {
        if let Some(metrics) = &self.metrics {
            metrics.record_view_derivation();
        }
    }

    /// Fetch all orders into the state. On failure the error is recorded in
    /// the state, the previous collection is kept, and nothing is retried.
    pub async fn load(&mut self) -> Result<usize, OrderError> {
        self.state.dispatch(Action::FetchPending);
        let started = Instant::now();

        let result = self.source.fetch_all().await;

        if let Some(metrics) = &self.metrics {
            metrics.record_order_fetch(started.elapsed().as_secs_f64(), result.is_ok());
        }

        match result {
            Ok(orders) => {
                let count = orders.len();
                self.state.dispatch(Action::FetchFulfilled(orders));
                tracing::info!(count = count, "Orders loaded");
                Ok(count)
            }
            Err(error) => {
                tracing::error!(error = %error, "Failed to load orders");
                self.state.dispatch(Action::FetchRejected(error.to_string()));
                Err(error)
            }
        }
    }

    /// Change one order's status after the simulated update delay.
    /// An unknown id produces no events.
    pub async fn change_status(&mut self, order_id: OrderId, status: OrderStatus) -> Vec<OrderEvent> {
        tokio::time::sleep(self.update_delay).await;
        self.execute(OrderCommand::SetStatus { order_id, status }, 1)
    }

    /// Change the status of every listed order that exists.
    pub async fn bulk_change_status(
        &mut self,
        order_ids: Vec<OrderId>,
        status: OrderStatus,
    ) -> Vec<OrderEvent> {
        tokio::time::sleep(self.update_delay).await;
        let requested = order_ids.len();
        self.execute(OrderCommand::SetStatusBulk { order_ids, status }, requested)
    }

    /// Bulk update over the current selection. The caller clears the
    /// selection afterwards if it wants to.
    pub async fn bulk_update_selected(&mut self, status: OrderStatus) -> Vec<OrderEvent> {
        let order_ids = self.state.selection().to_vec();
        tracing::info!(count = order_ids.len(), status = %status, "Bulk status update");
        self.bulk_change_status(order_ids, status).await
    }

    fn execute(&mut self, command: OrderCommand, requested: usize) -> Vec<OrderEvent> {
        let status = match &command {
            OrderCommand::SetStatus { status, .. } | OrderCommand::SetStatusBulk { status, .. } => *status,
        };
        let events = self.state.execute(command);
        if let Some(metrics) = &self.metrics {
            metrics.record_status_updates(status.as_str(), events.len(), requested);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::seed_orders;

    fn handler() -> OrderCommandHandler {
        OrderCommandHandler::from_config(&DashboardConfig::default().without_delays())
    }

    #[tokio::test]
    async fn test_load_populates_state() {
        let mut handler = handler();

        let count = handler.load().await.unwrap();

        assert_eq!(count, 10);
        assert!(!handler.state().is_loading());
        assert_eq!(handler.state().orders().len(), 10);
        assert_eq!(handler.view().len(), 10);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_collection_unpopulated() {
        let config = DashboardConfig {
            simulate_load_failure: true,
            ..DashboardConfig::default().without_delays()
        };
        let mut handler = OrderCommandHandler::from_config(&config);

        let err = handler.load().await.unwrap_err();

        assert_eq!(err, OrderError::load_failure());
        assert!(handler.state().orders().is_empty());
        assert_eq!(handler.state().error(), Some("Failed to fetch orders."));
        assert!(!handler.state().is_loading());
    }

    #[tokio::test]
    async fn test_change_status() {
        let mut handler = handler();
        handler.load().await.unwrap();

        let events = handler
            .change_status(OrderId::new("ORD-7352"), OrderStatus::Cancelled)
            .await;
        assert_eq!(events.len(), 1);

        let events = handler
            .change_status(OrderId::new("ORD-0001"), OrderStatus::Cancelled)
            .await;
        assert!(events.is_empty());

        let cancelled: Vec<_> = handler
            .state()
            .orders()
            .iter()
            .filter(|o| o.status == OrderStatus::Cancelled)
            .map(|o| o.id.to_string())
            .collect();
        assert_eq!(cancelled, vec!["ORD-7344", "ORD-7352"]);
    }

    #[tokio::test]
    async fn test_bulk_update_selected_leaves_selection() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let mut handler = handler().with_metrics(metrics.clone());
        handler.load().await.unwrap();
        handler.dispatch(Action::ToggleSelect(OrderId::new("ORD-7352")));
        handler.dispatch(Action::ToggleSelect(OrderId::new("ORD-7351")));

        let events = handler.bulk_update_selected(OrderStatus::Shipped).await;

        assert_eq!(events.len(), 2);
        assert_eq!(handler.state().selection().len(), 2);
        let seed = seed_orders();
        let untouched = handler
            .state()
            .orders()
            .iter()
            .filter(|o| seed.iter().any(|s| s == *o))
            .count();
        assert_eq!(untouched, 8);

        let text = metrics.encode_text().unwrap();
        assert!(text.contains("order_status_updates_total{status=\"Shipped\"} 2"));
    }

    #[tokio::test]
    async fn test_header_clicks() {
        let mut handler = handler();
        handler.load().await.unwrap();

        handler.toggle_sort(SortKey::Amount);
        handler.toggle_sort(SortKey::Amount);
        assert_eq!(handler.view()[0].id, OrderId::new("ORD-7343"));

        handler.toggle_select_all();
        assert_eq!(handler.state().selection().len(), 10);
    }

    #[tokio::test]
    async fn test_view_derivations_counted_for_views_and_select_all() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let mut handler = handler().with_metrics(metrics.clone());
        handler.load().await.unwrap();

        let _ = handler.view();
        handler.toggle_select_all();
        handler.toggle_select_all();

        let text = metrics.encode_text().unwrap();
        assert!(text.contains("order_view_derivations_total 3"));
    }

    #[tokio::test]
    async fn test_bulk_change_status_skips_unknown() {
        let mut handler = handler();
        handler.load().await.unwrap();

        let events = handler
            .bulk_change_status(
                vec![OrderId::new("ORD-7349"), OrderId::new("ORD-X")],
                OrderStatus::Delivered,
            )
            .await;

        assert_eq!(events.len(), 1);
        assert_eq!(
            handler.state().orders().get(&OrderId::new("ORD-7349")).unwrap().status,
            OrderStatus::Delivered
        );
    }
}
