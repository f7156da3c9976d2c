//! Image configuration (`RDAT`).
//!
//! An RDAT resource is a u16 of unknown meaning, the id of the last chunk,
//! then 10-byte chunks. There is no chunk count: the list ends with the chunk
//! whose id equals the last id read up front, and that chunk is included.

use afterglow_common::ByteCursor;
use zerocopy::byteorder::little_endian::U16;
use zerocopy::{FromBytes, Immutable, KnownLayout};

use crate::Result;

/// On-disk layout of a chunk.
#[derive(Debug, Clone, Copy, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
struct RawRdatChunk {
    id: U16,
    fields: [U16; 4],
}

/// One image configuration chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RdatChunk {
    pub id: u16,
    /// Unidentified fields, as stored.
    pub fields: [u16; 4],
}

impl RdatChunk {
    /// On-disk size of a chunk.
    pub const SIZE: usize = std::mem::size_of::<RawRdatChunk>();

    /// Read one chunk.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let raw: RawRdatChunk = cursor.read_struct()?;
        Ok(Self {
            id: raw.id.get(),
            fields: raw.fields.map(|field| field.get()),
        })
    }
}

/// A decoded image configuration resource.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rdat {
    unk1: u16,
    last_id: u16,
    chunks: Vec<RdatChunk>,
}

impl Rdat {
    /// Read an image configuration resource.
    ///
    /// Reading stops right after the chunk whose id matches the last id; any
    /// bytes after it are left unread. If no chunk matches, the cursor runs
    /// out and the error is reported as truncated input.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let unk1 = cursor.read_u16_le()?;
        let last_id = cursor.read_u16_le()?;

        let mut chunks = Vec::with_capacity(cursor.remaining() / RdatChunk::SIZE);
        loop {
            let chunk = RdatChunk::read(cursor)?;
            chunks.push(chunk);
            if chunk.id == last_id {
                break;
            }
        }

        Ok(Self {
            unk1,
            last_id,
            chunks,
        })
    }

    /// Get the unidentified leading field.
    pub fn unk1(&self) -> u16 {
        self.unk1
    }

    /// Get the id of the terminating chunk.
    pub fn last_id(&self) -> u16 {
        self.last_id
    }

    /// Get the chunks in order, terminating chunk included.
    pub fn chunks(&self) -> &[RdatChunk] {
        &self.chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn chunk(id: u16) -> Vec<u8> {
        let mut bytes = id.to_le_bytes().to_vec();
        for field in 1..=4u16 {
            bytes.extend((id * 10 + field).to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_chunk_size() {
        assert_eq!(RdatChunk::SIZE, 10);
    }

    #[test]
    fn test_stops_after_last_id() {
        let mut data = vec![0, 0, 7, 0];
        for id in [3, 4, 7, 9, 11] {
            data.extend(chunk(id));
        }
        let mut cursor = ByteCursor::new(&data);

        let rdat = Rdat::read(&mut cursor).unwrap();
        let ids: Vec<u16> = rdat.chunks().iter().map(|c| c.id).collect();
        assert_eq!(ids, [3, 4, 7]);
        assert_eq!(rdat.last_id(), 7);
        assert_eq!(rdat.chunks()[1].fields, [41, 42, 43, 44]);
        assert_eq!(cursor.remaining(), 2 * RdatChunk::SIZE);
    }

    #[test]
    fn test_first_chunk_is_last() {
        let mut data = vec![0, 0, 0, 0];
        data.extend(chunk(0));

        let rdat = Rdat::read(&mut ByteCursor::new(&data)).unwrap();
        assert_eq!(rdat.chunks().len(), 1);
    }

    #[test]
    fn test_unterminated_is_truncated() {
        let mut data = vec![0, 0, 7, 0];
        for id in [1, 2, 3] {
            data.extend(chunk(id));
        }

        let err = Rdat::read(&mut ByteCursor::new(&data)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedInput);
    }

    #[test]
    fn test_bounded_by_declared_end() {
        let mut data = vec![0, 0, 2, 0];
        data.extend(chunk(1));
        data.extend(chunk(2));
        let mut cursor = ByteCursor::bounded(&data, 4 + RdatChunk::SIZE).unwrap();

        let err = Rdat::read(&mut cursor).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedInput);
    }
}
