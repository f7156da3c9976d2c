//! Sequential cursor for decoding resource bytes.
//!
//! This module provides [`ByteCursor`], a position-tracked reader over a
//! borrowed byte slice. Reads never look past the cursor's end, which is
//! either the end of the slice or an explicit declared end offset.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use zerocopy::FromBytes;

use crate::text;
use crate::{Error, Result};

/// A cursor that reads primitives from a byte slice without copying.
///
/// Multi-byte integers are read with an explicit byte order per call, since
/// the resource formats mix little-endian and big-endian fields.
///
/// # Example
///
/// ```
/// use afterglow_common::{BigEndian, ByteCursor, LittleEndian};
///
/// let data = [0x01, 0x02, 0x01, 0x02];
/// let mut cursor = ByteCursor::new(&data);
///
/// assert_eq!(cursor.read_u16::<LittleEndian>().unwrap(), 0x0201);
/// assert_eq!(cursor.read_u16::<BigEndian>().unwrap(), 0x0102);
/// assert!(cursor.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
    end: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor over the whole slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            end: data.len(),
        }
    }

    /// Create a cursor that stops at `end` rather than at the end of the slice.
    pub fn bounded(data: &'a [u8], end: usize) -> Result<Self> {
        if end > data.len() {
            return Err(Error::EndOutOfBounds {
                end,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            position: 0,
            end,
        })
    }

    /// Get the current position.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Get the end offset reads are bounded by.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Get the number of bytes remaining before the end offset.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.end.saturating_sub(self.position)
    }

    /// Check if the cursor has reached its end offset.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.end
    }

    /// Peek at bytes without advancing the position.
    #[inline]
    pub fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                needed: count,
                available: self.remaining(),
            });
        }
        Ok(&self.data[self.position..self.position + count])
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(count)?;
        self.position += count;
        Ok(bytes)
    }

    /// Consume reserved bytes whose content is ignored.
    ///
    /// Fails like any other read if fewer than `count` bytes remain.
    #[inline]
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.read_bytes(count).map(|_| ())
    }

    /// Read a fixed-size array of bytes.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut array = [0u8; N];
        array.copy_from_slice(bytes);
        Ok(array)
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_bytes(1).map(|b| b[0])
    }

    /// Read a u16 in the given byte order.
    #[inline]
    pub fn read_u16<E: ByteOrder>(&mut self) -> Result<u16> {
        self.read_bytes(2).map(E::read_u16)
    }

    /// Read a u32 in the given byte order.
    #[inline]
    pub fn read_u32<E: ByteOrder>(&mut self) -> Result<u32> {
        self.read_bytes(4).map(E::read_u32)
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.read_u16::<LittleEndian>()
    }

    /// Read a big-endian u16.
    #[inline]
    pub fn read_u16_be(&mut self) -> Result<u16> {
        self.read_u16::<BigEndian>()
    }

    /// Read a big-endian u32.
    #[inline]
    pub fn read_u32_be(&mut self) -> Result<u32> {
        self.read_u32::<BigEndian>()
    }

    /// Read a fixed-size string field of `size` bytes.
    ///
    /// Trailing nulls are stripped; a field with no null at all yields all
    /// `size` characters.
    pub fn read_fixed_string(&mut self, size: usize) -> Result<String> {
        let bytes = self.read_bytes(size)?;
        Ok(text::decode_latin1(text::trim_trailing_nulls(bytes)))
    }

    /// Read a null-terminated string. The terminator is consumed but not returned.
    pub fn read_cstring(&mut self) -> Result<String> {
        let available = &self.data[self.position..self.end];
        let null_pos =
            memchr::memchr(0, available).ok_or(Error::MissingNullTerminator)?;

        let string = text::decode_latin1(&available[..null_pos]);
        self.position += null_pos + 1;
        Ok(string)
    }

    /// Read a struct using zerocopy.
    ///
    /// The struct must implement `FromBytes` from the zerocopy crate.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let bytes = self.read_bytes(size)?;
        T::read_from_bytes(bytes).map_err(|_| Error::UnexpectedEof {
            needed: size,
            available: bytes.len(),
        })
    }
}
