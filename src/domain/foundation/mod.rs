//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error vocabulary that the audit and
//! analysis modules are built from.

mod errors;
mod percentage;
mod score;

pub use errors::{ErrorCode, ValidationError};
pub use percentage::Percentage;
pub use score::Score;
