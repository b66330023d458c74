//! Capacity growth policy.

use crate::error::BufferError;

/// Default multiplicative growth factor.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.1;

/// Decides how large a region becomes when a write does not fit.
///
/// The new capacity is `max(floor(capacity * factor), capacity + needed)`.
/// The geometric term keeps the total copying of many small writes linear;
/// the additive term covers a single write larger than one geometric step
/// (and an empty starting region, where the geometric term is zero).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    factor: f64,
}

impl GrowthPolicy {
    /// Creates a policy with the given factor.
    ///
    /// Returns error if the factor is not finite or not greater than 1.
    pub fn new(factor: f64) -> Result<Self, BufferError> {
        if !factor.is_finite() {
            return Err(BufferError::InvalidConfig {
                message: "growth factor must be finite",
            });
        }

        if factor <= 1.0 {
            return Err(BufferError::InvalidConfig {
                message: "growth factor must be greater than 1",
            });
        }

        Ok(Self { factor })
    }

    /// Returns the growth factor.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Computes the capacity to grow to when `needed` more bytes must fit
    /// into a region of `capacity` bytes.
    pub fn next_capacity(&self, capacity: usize, needed: usize) -> Result<usize, BufferError> {
        let min = capacity
            .checked_add(needed)
            .ok_or(BufferError::CapacityOverflow)?;
        // float-to-int `as` saturates at usize::MAX
        let scaled = (capacity as f64 * self.factor) as usize;
        Ok(scaled.max(min))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}
