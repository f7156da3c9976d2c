//! Common utilities for Afterglow.
//!
//! This crate provides the low-level reading primitives shared by every
//! resource decoder:
//!
//! - [`ByteCursor`] - Position-tracked reader over a borrowed byte slice,
//!   bounded by the resource's declared end offset
//! - [`text`] - Single-byte (Latin-1) string decoding for padded and
//!   null-terminated fields

mod cursor;
mod error;

pub mod text;

pub use cursor::ByteCursor;
pub use error::{Error, Result};

/// Re-export the byte order markers used with [`ByteCursor::read_u16`] and friends.
pub use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, KnownLayout};
