//! Configuration for buffer construction.
//!
//! - [`BufferConfig`] - Initial capacity and growth behavior
//!
//! # Example
//!
//! ```
//! use growbuf::{BufferConfig, GrowableBuffer};
//!
//! // Size for a typical batch, grow by 50% when it overflows
//! let config = BufferConfig::new(16 * 1024, 1.5)?;
//! let buffer = GrowableBuffer::with_config(config)?;
//! assert_eq!(buffer.capacity(), 16 * 1024);
//!
//! # Ok::<(), growbuf::BufferError>(())
//! ```

use crate::buffer::{DEFAULT_GROWTH_FACTOR, GrowthPolicy};
use crate::error::BufferError;

/// Default initial capacity (1 KiB).
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// Configuration for a [`GrowableBuffer`](crate::GrowableBuffer).
///
/// The initial capacity is only an estimate: writes past it trigger growth
/// according to the growth policy. Any initial capacity, including zero, is
/// valid. The growth factor must be finite and greater than 1.
///
/// # Example
///
/// ```
/// use growbuf::BufferConfig;
///
/// let config = BufferConfig::default()
///     .with_initial_capacity(4096)
///     .with_growth_factor(2.0);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.initial_capacity(), 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferConfig {
    /// Capacity allocated up front.
    initial_capacity: usize,

    /// Multiplicative factor applied when the region grows.
    growth_factor: f64,
}

impl BufferConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidConfig`] if `growth_factor` is not
    /// finite or not greater than 1.
    pub fn new(initial_capacity: usize, growth_factor: f64) -> Result<Self, BufferError> {
        GrowthPolicy::new(growth_factor)?;

        Ok(Self {
            initial_capacity,
            growth_factor,
        })
    }

    /// Sets the initial capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the growth factor.
    ///
    /// Note: This does not validate the configuration. Use [`BufferConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Returns the initial capacity.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the growth factor.
    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::BufferConfig;
    ///
    /// let config = BufferConfig::default().with_growth_factor(0.9);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), BufferError> {
        self.growth_policy().map(|_| ())
    }

    pub(crate) fn growth_policy(&self) -> Result<GrowthPolicy, BufferError> {
        GrowthPolicy::new(self.growth_factor)
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}
