use crate::domain::order::{
    Order, OrderCommand, OrderEvent, OrderId, OrderStatus, StatusFilter,
};
use super::collection::OrderCollection;
use super::selection::SelectionSet;
use super::view::{derive_view, SortDirection, SortKey, ViewCriteria};

// ============================================================================
// Orders State - the explicit application state object
// ============================================================================
//
// Every write goes through `dispatch` (or `execute` for order commands), so
// the mutation sites are exactly the match arms below.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchPending,
    FetchFulfilled(Vec<Order>),
    FetchRejected(String),
    StatusUpdated { order_id: OrderId, status: OrderStatus },
    SetSelected(Vec<OrderId>),
    ToggleSelect(OrderId),
    ClearSelection,
    SetSearchTerm(String),
    SetStatusFilter(StatusFilter),
    SetSortKey(SortKey),
    SetSortDirection(SortDirection),
}

#[derive(Debug, Clone, Default)]
pub struct OrdersState {
    orders: OrderCollection,
    loading: bool,
    error: Option<String>,
    selection: SelectionSet,
    criteria: ViewCriteria,
}

impl OrdersState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the collection already populated.
    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            orders: OrderCollection::from_orders(orders),
            ..Self::default()
        }
    }

    pub fn orders(&self) -> &OrderCollection {
        &self.orders
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn criteria(&self) -> &ViewCriteria {
        &self.criteria
    }

    /// Current derived view.
    pub fn view(&self) -> Vec<&Order> {
        derive_view(&self.orders, &self.criteria)
    }

    /// Apply an action. Returns the order events it produced, if any.
    pub fn dispatch(&mut self, action: Action) -> Vec<OrderEvent> {
        match action {
            Action::FetchPending => {
                self.loading = true;
                self.error = None;
            }
            Action::FetchFulfilled(orders) => {
                self.loading = false;
                self.orders = OrderCollection::from_orders(orders);
                self.selection.retain_existing(&self.orders);
            }
            Action::FetchRejected(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            Action::StatusUpdated { order_id, status } => {
                return self.execute(OrderCommand::SetStatus { order_id, status });
            }
            Action::SetSelected(ids) => self.selection.set(ids, &self.orders),
            Action::ToggleSelect(id) => self.selection.toggle(&id, &self.orders),
            Action::ClearSelection => self.selection.clear(),
            Action::SetSearchTerm(term) => self.criteria.search_term = term,
            Action::SetStatusFilter(filter) => self.criteria.status_filter = filter,
            Action::SetSortKey(key) => self.criteria.sort_key = key,
            Action::SetSortDirection(direction) => self.criteria.direction = direction,
        }
        Vec::new()
    }

    /// Handle an order command against the collection and apply its events.
    pub fn execute(&mut self, command: OrderCommand) -> Vec<OrderEvent> {
        let events = self.orders.handle_command(&command);
        for event in &events {
            match event {
                OrderEvent::StatusChanged(change) => tracing::info!(
                    order_id = %change.order_id,
                    from = %change.from,
                    to = %change.to,
                    "Order status updated"
                ),
            }
            self.orders.apply_event(event);
        }
        events
    }

    /// Set `status` on every selected order. The selection is left as is.
    pub fn bulk_update(&mut self, status: OrderStatus) -> Vec<OrderEvent> {
        let order_ids = self.selection.to_vec();
        self.execute(OrderCommand::SetStatusBulk { order_ids, status })
    }

    /// Column header click.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.criteria.toggle_sort(key);
    }

    /// Header checkbox over the current view.
    pub fn toggle_select_all(&mut self) {
        let view = derive_view(&self.orders, &self.criteria);
        self.selection.toggle_all(&view);
    }

    /// Select exactly the current view.
    pub fn select_all(&mut self) {
        let view = derive_view(&self.orders, &self.criteria);
        self.selection.select_all(&view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::seed_orders;

    fn seeded() -> OrdersState {
        OrdersState::with_orders(seed_orders())
    }

    #[test]
    fn test_initial_criteria() {
        let state = OrdersState::new();
        assert_eq!(state.criteria().sort_key, SortKey::Date);
        assert_eq!(state.criteria().direction, SortDirection::Desc);
        assert_eq!(state.criteria().status_filter, StatusFilter::All);
        assert!(state.criteria().search_term.is_empty());
        assert!(state.orders().is_empty());
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = OrdersState::new();

        state.dispatch(Action::FetchPending);
        assert!(state.is_loading());

        state.dispatch(Action::FetchFulfilled(seed_orders()));
        assert!(!state.is_loading());
        assert_eq!(state.orders().len(), 10);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_fetch_rejected_keeps_prior_collection() {
        let mut state = seeded();

        state.dispatch(Action::FetchPending);
        state.dispatch(Action::FetchRejected("Failed to fetch orders.".to_string()));

        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("Failed to fetch orders."));
        assert_eq!(state.orders().len(), 10);

        state.dispatch(Action::FetchPending);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_refetch_prunes_missing_selection() {
        let mut state = seeded();
        state.dispatch(Action::ToggleSelect(OrderId::new("ORD-7352")));
        state.dispatch(Action::ToggleSelect(OrderId::new("ORD-7351")));

        let remaining: Vec<Order> = seed_orders()
            .into_iter()
            .filter(|o| o.id != OrderId::new("ORD-7351"))
            .collect();
        state.dispatch(Action::FetchFulfilled(remaining));

        assert_eq!(state.selection().to_vec(), vec![OrderId::new("ORD-7352")]);
    }

    #[test]
    fn test_status_updated_action() {
        let mut state = seeded();

        let events = state.dispatch(Action::StatusUpdated {
            order_id: OrderId::new("ORD-7352"),
            status: OrderStatus::Cancelled,
        });

        assert_eq!(events.len(), 1);
        assert_eq!(
            state.orders().get(&OrderId::new("ORD-7352")).unwrap().status,
            OrderStatus::Cancelled
        );

        let events = state.dispatch(Action::StatusUpdated {
            order_id: OrderId::new("ORD-1"),
            status: OrderStatus::Cancelled,
        });
        assert!(events.is_empty());
    }

    #[test]
    fn test_bulk_update_uses_selection_and_keeps_it() {
        let mut state = seeded();
        state.dispatch(Action::SetSelected(vec![
            OrderId::new("ORD-7352"),
            OrderId::new("ORD-7351"),
        ]));

        let events = state.bulk_update(OrderStatus::Shipped);

        assert_eq!(events.len(), 2);
        assert_eq!(state.selection().len(), 2);
        let shipped = state
            .orders()
            .iter()
            .filter(|o| o.status == OrderStatus::Shipped)
            .count();
        // two seed orders were already shipped
        assert_eq!(shipped, 4);

        state.dispatch(Action::ClearSelection);
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_criteria_actions_drive_view() {
        let mut state = seeded();

        state.dispatch(Action::SetStatusFilter(StatusFilter::Only(OrderStatus::Processing)));
        assert_eq!(state.view().len(), 2);

        state.dispatch(Action::SetSearchTerm("chen".to_string()));
        let view = state.view();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, OrderId::new("ORD-7351"));

        state.dispatch(Action::SetSearchTerm(String::new()));
        state.dispatch(Action::SetStatusFilter(StatusFilter::All));
        state.dispatch(Action::SetSortKey(SortKey::Amount));
        state.dispatch(Action::SetSortDirection(SortDirection::Desc));
        assert_eq!(state.view()[0].id, OrderId::new("ORD-7343"));
    }

    #[test]
    fn test_toggle_select_all_over_filtered_view() {
        let mut state = seeded();
        state.dispatch(Action::SetStatusFilter(StatusFilter::Only(OrderStatus::Delivered)));

        state.toggle_select_all();
        assert_eq!(state.selection().len(), 5);

        state.toggle_select_all();
        assert!(state.selection().is_empty());

        state.select_all();
        assert_eq!(state.selection().len(), 5);
    }

    #[test]
    fn test_toggle_sort_through_state() {
        let mut state = seeded();
        state.toggle_sort(SortKey::Customer);
        assert_eq!(state.view()[0].customer, "Ava Johnson");
    }
}
