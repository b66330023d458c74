//! The growable write buffer.

use std::fmt;
use std::io;
use std::ops::Range;

use bytes::Bytes;
use tracing::{trace, warn};

use super::GrowthPolicy;
use crate::config::BufferConfig;
use crate::error::BufferError;

/// An owned byte region with a write cursor that grows on demand.
///
/// Bytes are appended at the cursor. When a write does not fit into the
/// remaining capacity, a larger region is allocated (see [`GrowthPolicy`]),
/// the valid prefix `[0, position)` is copied over, and the old region is
/// dropped. Trailing bytes past the cursor are never copied; the tail of a
/// grown region is zero-filled.
///
/// The capacity reported by [`capacity`](Self::capacity) is exact: it is the
/// length of the owned region, not whatever the allocator rounded up to.
///
/// # Access
///
/// [`as_slice`](Self::as_slice) borrows the buffer, so a view cannot outlive
/// the next write. When an index-based handle is needed instead,
/// [`written_range`](Self::written_range) stays meaningful across growth,
/// since growth never moves bytes within the region.
///
/// # Concurrency
///
/// There is no internal synchronization. Every mutating method takes
/// `&mut self`, so a single owner writes at a time; callers that need to
/// share a buffer across threads wrap it in their own lock.
///
/// # Example
///
/// ```
/// use growbuf::GrowableBuffer;
///
/// let mut buf = GrowableBuffer::with_capacity(4);
/// buf.put_slice(&[1, 2, 3])?;
/// buf.write_byte(4)?;
/// assert_eq!(buf.capacity(), 4);
///
/// buf.write_byte(5)?;
/// assert_eq!(buf.capacity(), 5);
/// assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
/// # Ok::<(), growbuf::BufferError>(())
/// ```
pub struct GrowableBuffer {
    region: Vec<u8>,
    position: usize,
    initial_capacity: usize,
    reallocations: usize,
    policy: GrowthPolicy,
}

impl GrowableBuffer {
    /// Creates a buffer with an empty region. The first write allocates.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a zeroed region of `capacity` bytes with the cursor at 0.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            region: vec![0; capacity],
            position: 0,
            initial_capacity: capacity,
            reallocations: 0,
            policy: GrowthPolicy::default(),
        }
    }

    /// Creates a buffer from a [`BufferConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidConfig`] if the growth factor is invalid.
    pub fn with_config(config: BufferConfig) -> Result<Self, BufferError> {
        let policy = config.growth_policy()?;
        Ok(Self::with_capacity(config.initial_capacity()).with_growth_policy(policy))
    }

    /// Wraps an existing region.
    ///
    /// The region's length is the buffer's capacity. Bytes in
    /// `[0, position)` are treated as already written, so a region holding
    /// a prefix (a batch header, say) can be continued in place.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidPosition`] if `position` exceeds the
    /// region's length.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::GrowableBuffer;
    ///
    /// let mut region = vec![0u8; 8];
    /// region[..2].copy_from_slice(&[0xCA, 0xFE]);
    ///
    /// let mut buf = GrowableBuffer::from_region(region, 2)?;
    /// buf.write_byte(0x01)?;
    /// assert_eq!(buf.as_slice(), &[0xCA, 0xFE, 0x01]);
    /// # Ok::<(), growbuf::BufferError>(())
    /// ```
    pub fn from_region(region: impl Into<Vec<u8>>, position: usize) -> Result<Self, BufferError> {
        let region = region.into();
        if position > region.len() {
            return Err(BufferError::InvalidPosition {
                position,
                capacity: region.len(),
            });
        }

        Ok(Self {
            initial_capacity: region.len(),
            region,
            position,
            reallocations: 0,
            policy: GrowthPolicy::default(),
        })
    }

    /// Replaces the growth policy.
    pub fn with_growth_policy(mut self, policy: GrowthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Appends a single byte, growing the region if it is full.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), BufferError> {
        self.ensure_remaining(1)?;
        self.region[self.position] = byte;
        self.position += 1;
        Ok(())
    }

    /// Appends `src[offset..offset + len]`, growing the region if needed.
    ///
    /// The range is checked before anything else; on error the buffer is
    /// untouched. A zero `len` with an in-bounds `offset` does nothing.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidRange`] if the range is outside `src`
    /// - [`BufferError::AllocationFailed`] / [`BufferError::CapacityOverflow`]
    ///   if the region cannot grow
    pub fn write_slice(&mut self, src: &[u8], offset: usize, len: usize) -> Result<(), BufferError> {
        let end = match offset.checked_add(len) {
            Some(end) if end <= src.len() => end,
            _ => {
                return Err(BufferError::InvalidRange {
                    offset,
                    len,
                    source_len: src.len(),
                });
            }
        };

        if len == 0 {
            return Ok(());
        }

        self.ensure_remaining(len)?;
        self.region[self.position..self.position + len].copy_from_slice(&src[offset..end]);
        self.position += len;
        Ok(())
    }

    /// Appends all of `src`.
    pub fn put_slice(&mut self, src: &[u8]) -> Result<(), BufferError> {
        self.write_slice(src, 0, src.len())
    }

    /// Makes sure at least `additional` bytes can be written without
    /// growing again.
    ///
    /// Growth uses the same policy as a write of `additional` bytes, so
    /// reserving ahead of a known-size record produces the same capacity
    /// the record's write would have.
    pub fn ensure_remaining(&mut self, additional: usize) -> Result<(), BufferError> {
        if self.remaining() < additional {
            self.grow(additional)?;
        }
        Ok(())
    }

    fn grow(&mut self, needed: usize) -> Result<(), BufferError> {
        let old_capacity = self.capacity();
        let new_capacity = self.policy.next_capacity(old_capacity, needed)?;

        let mut region = Vec::new();
        if region.try_reserve_exact(new_capacity).is_err() {
            warn!(
                old_capacity,
                requested = new_capacity,
                "buffer region allocation failed"
            );
            return Err(BufferError::AllocationFailed {
                requested: new_capacity,
            });
        }

        // only the written prefix carries over
        region.extend_from_slice(&self.region[..self.position]);
        region.resize(new_capacity, 0);

        trace!(
            old_capacity,
            new_capacity,
            copied = self.position,
            "grew buffer region"
        );

        self.region = region;
        self.reallocations += 1;
        Ok(())
    }

    /// Returns the write cursor, which is also the number of valid bytes.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the size of the owned region.
    pub fn capacity(&self) -> usize {
        self.region.len()
    }

    /// Returns how many bytes fit before the next growth.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.position
    }

    /// Returns the capacity the buffer was created with.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns how many times the region has been reallocated.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.position == 0
    }

    /// Returns the written bytes, `[0, position)`.
    pub fn as_slice(&self) -> &[u8] {
        &self.region[..self.position]
    }

    /// Returns the index range of the written bytes within the region.
    pub fn written_range(&self) -> Range<usize> {
        0..self.position
    }

    /// Copies the written bytes out.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// Consumes the buffer and returns the whole region together with the
    /// number of valid bytes at its start.
    pub fn into_parts(self) -> (Vec<u8>, usize) {
        (self.region, self.position)
    }

    /// Consumes the buffer and returns the written bytes.
    pub fn into_vec(self) -> Vec<u8> {
        let mut region = self.region;
        region.truncate(self.position);
        region
    }

    /// Consumes the buffer and returns the written bytes as [`Bytes`],
    /// ready to hand to a network or storage writer.
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.into_vec())
    }
}

impl Default for GrowableBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GrowableBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableBuffer")
            .field("position", &self.position)
            .field("capacity", &self.capacity())
            .field("reallocations", &self.reallocations)
            .field("growth_factor", &self.policy.factor())
            .finish()
    }
}

impl io::Write for GrowableBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.put_slice(buf)?;
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.put_slice(buf)?;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
