use std::collections::BTreeSet;

use crate::domain::order::{Order, OrderId};
use super::collection::OrderCollection;

// ============================================================================
// Selection Tracker
// ============================================================================
//
// Set of order ids targeted by bulk actions. Independent of the current
// view: an id hidden by the active filter stays selected. Only ids present
// in the collection are ever admitted.
//
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<OrderId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &OrderId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderId> {
        self.ids.iter()
    }

    pub fn to_vec(&self) -> Vec<OrderId> {
        self.ids.iter().cloned().collect()
    }

    /// Add `id` if absent, remove it if present. Ids unknown to the collection are ignored.
    pub fn toggle(&mut self, id: &OrderId, collection: &OrderCollection) {
        if self.ids.remove(id) {
            return;
        }
        if collection.contains(id) {
            self.ids.insert(id.clone());
        } else {
            tracing::debug!(order_id = %id, "Ignoring selection of unknown order");
        }
    }

    /// Replace the selection with exactly the ids of `view`.
    pub fn select_all(&mut self, view: &[&Order]) {
        self.ids = view.iter().map(|order| order.id.clone()).collect();
    }

    /// Replace the selection with the given ids, keeping only those in the collection.
    pub fn set(&mut self, ids: impl IntoIterator<Item = OrderId>, collection: &OrderCollection) {
        self.ids = ids.into_iter().filter(|id| collection.contains(id)).collect();
    }

    /// Header checkbox: clear when the selection is as large as the view,
    /// otherwise select the whole view.
    pub fn toggle_all(&mut self, view: &[&Order]) {
        if self.ids.len() == view.len() {
            self.clear();
        } else {
            self.select_all(view);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that no longer exist after the collection was replaced.
    pub fn retain_existing(&mut self, collection: &OrderCollection) {
        self.ids.retain(|id| collection.contains(id));
    }
}
