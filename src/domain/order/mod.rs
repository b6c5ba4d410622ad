// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (OrderId, OrderItem, OrderStatus, StatusFilter)
// - Events (OrderStatusChanged)
// - Commands (SetStatus, SetStatusBulk)
// - Errors (OrderError)
// - Order record
// - Command handler (async load / status updates over OrdersState)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod command_handler;

pub use value_objects::*;
pub use events::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use command_handler::*;
