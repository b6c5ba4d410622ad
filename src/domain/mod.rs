// ============================================================================
// Domain Layer
// ============================================================================
//
// Each domain has its own subdirectory with its value objects, errors and,
// where it has behavior, commands, events and a command handler.
//
// ============================================================================

pub mod order;
pub mod product;
