// ============================================================================
// Order Store
// ============================================================================
//
// In-memory order collection, selection set and view derivation, tied
// together by `OrdersState`.
//
// ============================================================================

mod collection;
mod selection;
mod state;
mod view;

pub use collection::OrderCollection;
pub use selection::SelectionSet;
pub use state::{Action, OrdersState};
pub use view::{derive_view, SortDirection, SortKey, ViewCriteria};
