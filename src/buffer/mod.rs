//! The growable write buffer and its growth policy.
//!
//! - [`GrowableBuffer`] - Owned region plus write cursor
//! - [`GrowthPolicy`] - Capacity to grow to when a write does not fit

mod growable;
mod growth;

pub use growable::GrowableBuffer;
pub use growth::{DEFAULT_GROWTH_FACTOR, GrowthPolicy};
