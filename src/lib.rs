//! growbuf
//!
//! A growable write buffer for incremental binary serialization.
//!
//! `growbuf` lets serialization code append bytes into a pre-sized region
//! without knowing the final size up front. When the estimate turns out to
//! be too small, the buffer allocates a larger region, copies the bytes
//! written so far, and carries on. It is designed as a small primitive for:
//!
//! - building batches of wire-format records
//! - encoding frames before a single network write
//! - assembling file blocks before they are flushed
//!
//! The crate intentionally:
//! - does NOT perform I/O (hand the result to your own sink)
//! - does NOT synchronize (one writer at a time, enforced by `&mut`)
//! - does NOT shrink, seek or rewrite
//!
//! It only does one thing: **Write bytes → hand off bytes**
//!
//! # Sync
//!
//! ```
//! use growbuf::{BufferError, GrowableBuffer};
//!
//! fn main() -> Result<(), BufferError> {
//!     // Estimate too small on purpose
//!     let mut buf = GrowableBuffer::with_capacity(8);
//!
//!     for record in [&b"alpha"[..], b"beta", b"gamma"] {
//!         buf.write_byte(record.len() as u8)?;
//!         buf.put_slice(record)?;
//!     }
//!
//!     let bytes = buf.into_bytes();
//!     assert_eq!(bytes.len(), 17);
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::AsyncWriteExt;
//! use growbuf::GrowableBuffer;
//!
//! async fn demo() -> std::io::Result<()> {
//!     let mut buf = GrowableBuffer::with_capacity(4);
//!     buf.write_all(b"hello world").await?;
//!     assert_eq!(buf.as_slice(), b"hello world");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;

#[cfg(feature = "async-io")]
mod async_write;

//
// Public surface (intentionally tiny)
//

pub use buffer::{DEFAULT_GROWTH_FACTOR, GrowableBuffer, GrowthPolicy};
pub use config::{BufferConfig, DEFAULT_INITIAL_CAPACITY};
pub use error::BufferError;
