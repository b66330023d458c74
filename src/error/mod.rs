//! Error types for growbuf.

use std::fmt;

/// Errors that can occur while writing into a [`GrowableBuffer`](crate::GrowableBuffer).
///
/// Every error is raised before the buffer is mutated, so the cursor,
/// capacity and contents are unchanged when a call returns `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The `offset`/`len` pair does not lie within the source slice.
    InvalidRange {
        /// Requested start offset into the source.
        offset: usize,
        /// Requested number of bytes.
        len: usize,
        /// Length of the source slice.
        source_len: usize,
    },

    /// The starting cursor lies beyond the end of the supplied region.
    InvalidPosition {
        /// The requested starting cursor.
        position: usize,
        /// Capacity of the supplied region.
        capacity: usize,
    },

    /// The allocator could not provide the grown region.
    AllocationFailed {
        /// The capacity that was requested.
        requested: usize,
    },

    /// The required capacity does not fit in `usize`.
    CapacityOverflow,

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::InvalidRange {
                offset,
                len,
                source_len,
            } => write!(
                f,
                "invalid range: offset {} + len {} exceeds source length {}",
                offset, len, source_len
            ),
            BufferError::InvalidPosition { position, capacity } => {
                write!(
                    f,
                    "invalid position: {} is beyond capacity {}",
                    position, capacity
                )
            }
            BufferError::AllocationFailed { requested } => {
                write!(f, "allocation failed: {} bytes", requested)
            }
            BufferError::CapacityOverflow => write!(f, "capacity overflow"),
            BufferError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for BufferError {}

impl From<BufferError> for std::io::Error {
    fn from(e: BufferError) -> Self {
        let kind = match e {
            BufferError::InvalidRange { .. }
            | BufferError::InvalidPosition { .. }
            | BufferError::InvalidConfig { .. } => std::io::ErrorKind::InvalidInput,
            BufferError::AllocationFailed { .. } | BufferError::CapacityOverflow => {
                std::io::ErrorKind::OutOfMemory
            }
        };
        std::io::Error::new(kind, e)
    }
}
