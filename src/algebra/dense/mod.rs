//! Dense matrix destination type for upper-triangle scatter operations.

mod core;
pub use self::core::*;
