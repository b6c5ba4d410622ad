//! Order list state for an e-commerce admin dashboard: an in-memory order
//! collection, a filtered and sorted view over it, a selection set for bulk
//! status changes, and a client for the products endpoint.

pub mod api;
pub mod config;
pub mod domain;
pub mod format;
pub mod metrics;
pub mod source;
pub mod store;

pub use config::DashboardConfig;
pub use domain::order::{
    Order, OrderCommand, OrderCommandHandler, OrderError, OrderEvent, OrderId, OrderItem,
    OrderStatus, StatusFilter,
};
pub use domain::product::Product;
pub use store::{Action, OrdersState, SortDirection, SortKey, ViewCriteria};
