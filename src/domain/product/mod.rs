// ============================================================================
// Product Domain
// ============================================================================

pub mod value_objects;
pub mod criteria;

pub use value_objects::*;
pub use criteria::*;
