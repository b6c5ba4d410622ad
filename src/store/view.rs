use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::order::{Order, OrderError, StatusFilter};
use super::collection::OrderCollection;

// ============================================================================
// Order View Derivation
// ============================================================================
//
// Pure function of (collection, criteria). Nothing is cached here; callers
// recompute whenever either input changes.
//
// ============================================================================

/// Column the order list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Customer,
    Date,
    Amount,
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Id,
        SortKey::Customer,
        SortKey::Date,
        SortKey::Amount,
        SortKey::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Customer => "customer",
            SortKey::Date => "date",
            SortKey::Amount => "amount",
            SortKey::Status => "status",
        }
    }

    /// Ascending comparator for this key.
    pub fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            SortKey::Id => compare_text(a.id.as_str(), b.id.as_str()),
            SortKey::Customer => compare_text(&a.customer, &b.customer),
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.total_cmp(&b.amount),
            SortKey::Status => compare_text(a.status.as_str(), b.status.as_str()),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OrderError::UnknownSortKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(OrderError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Search, filter and sort settings of the order list.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewCriteria {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl Default for ViewCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            sort_key: SortKey::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl ViewCriteria {
    /// Inclusion predicate: search match AND status filter match.
    pub fn includes(&self, order: &Order) -> bool {
        order.matches_search(&self.search_term) && self.status_filter.matches(order.status)
    }

    /// Column header click: same key flips direction, a new key sorts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.direction = self.direction.flipped();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Asc;
        }
    }
}

/// Filtered and sorted view over the collection.
///
/// `Desc` is the exact reverse of the `Asc` sequence, ties included.
pub fn derive_view<'a>(collection: &'a OrderCollection, criteria: &ViewCriteria) -> Vec<&'a Order> {
    let mut view: Vec<&Order> = collection
        .iter()
        .filter(|order| criteria.includes(order))
        .collect();

    view.sort_by(|a, b| criteria.sort_key.compare(a, b));
    if criteria.direction == SortDirection::Desc {
        view.reverse();
    }
    view
}
