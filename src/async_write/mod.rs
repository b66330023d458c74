//! Async write support for the growable buffer.
//!
//! [`GrowableBuffer`](crate::GrowableBuffer) implements `futures_io::AsyncWrite`,
//! so async serializers written against that trait (or against tokio's via
//! `tokio_util::compat`) can target it directly. The buffer never blocks:
//! every poll completes immediately.
//!
//! This module requires the `async-io` feature to be enabled.

mod write;
