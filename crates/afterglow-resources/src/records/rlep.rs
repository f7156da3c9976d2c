//! Image frames (`RLEP`).
//!
//! An RLEP resource is a stream of chunks. Each chunk is a 4-byte ASCII
//! type followed by a big-endian header:
//!
//! ```text
//! [0x00] Magic        (4 bytes: RLID, CSTM, CTAB or IHDR)
//! [0x04] Id           (u32 BE)
//! [0x08] Last chunk   (u32 BE)
//! [0x0C] Length       (u32 BE, whole chunk including magic and header)
//! [0x10] Payload      (Length - 0x10 bytes)
//! ```
//!
//! The stream ends with a chunk header of all zeroes, or at the resource's
//! declared end. Fewer than four bytes left before the declared end are
//! padding. `CSTM` chunks carry compressed frame data; `IHDR` chunks
//! carry the dimensions of a frame whose `CSTM` came earlier in the stream.

use std::collections::BTreeMap;
use std::fmt;

use afterglow_common::ByteCursor;
use zerocopy::byteorder::big_endian::{U16, U32};
use zerocopy::{FromBytes, Immutable, KnownLayout};

use crate::{Error, Result};

/// Prefix carried by `CSTM` chunk ids. The second stream chunk (frame 1) has
/// id `0x5F010001`.
pub const CSTM_ID_BIAS: u32 = 0x5F01_0000;

/// A 4-byte chunk type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChunkMagic(pub [u8; 4]);

impl ChunkMagic {
    /// Size of a chunk type.
    pub const SIZE: usize = 4;

    /// Identifier chunk.
    pub const RLID: Self = Self(*b"RLID");
    /// Compressed stream.
    pub const CSTM: Self = Self(*b"CSTM");
    /// Color table.
    pub const CTAB: Self = Self(*b"CTAB");
    /// Image header (not PNG's).
    pub const IHDR: Self = Self(*b"IHDR");
    /// End of the chunk stream.
    pub const END: Self = Self([0; 4]);
}

impl fmt::Display for ChunkMagic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}

/// Common chunk header following the magic.
#[derive(Debug, Clone, Copy, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
struct RawChunkHeader {
    id: U32,
    last_chunk: U32,
    length: U32,
}

/// `IHDR` payload.
#[derive(Debug, Clone, Copy, FromBytes, Immutable, KnownLayout)]
#[repr(C)]
struct RawImageHeader {
    unk1: U32,
    unk2: U32,
    width: U16,
    height: U16,
}

/// A chunk header with its payload size resolved.
#[derive(Debug, Clone, Copy)]
struct ChunkHeader {
    id: u32,
    last_chunk: u32,
    payload_size: usize,
}

impl ChunkHeader {
    /// Read the header of a chunk whose magic started at `start`.
    fn read(cursor: &mut ByteCursor<'_>, magic: ChunkMagic, start: usize) -> Result<Self> {
        let raw: RawChunkHeader = cursor.read_struct()?;
        let length = raw.length.get();

        // The length covers the magic and header too.
        let consumed = cursor.position() - start;
        let payload_size = (length as usize)
            .checked_sub(consumed)
            .ok_or(Error::ChunkTooShort {
                magic,
                length,
                header: consumed,
            })?;

        Ok(Self {
            id: raw.id.get(),
            last_chunk: raw.last_chunk.get(),
            payload_size,
        })
    }
}

/// An opaque chunk (`RLID` or `CTAB`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RawChunk {
    pub id: u32,
    pub last_chunk: u32,
    pub data: Vec<u8>,
}

impl RawChunk {
    fn read(cursor: &mut ByteCursor<'_>, header: &ChunkHeader) -> Result<Self> {
        Ok(Self {
            id: header.id,
            last_chunk: header.last_chunk,
            data: cursor.read_bytes(header.payload_size)?.to_vec(),
        })
    }
}

/// Frame dimensions from an `IHDR` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImageHeader {
    /// Chunk id, as stored.
    pub id: u32,
    pub unk1: u32,
    pub unk2: u32,
    pub width: u16,
    pub height: u16,
}

impl ImageHeader {
    /// Size of the `IHDR` payload.
    pub const SIZE: usize = std::mem::size_of::<RawImageHeader>();

    fn read(cursor: &mut ByteCursor<'_>, header: &ChunkHeader) -> Result<Self> {
        let raw: RawImageHeader = cursor.read_struct()?;
        cursor.skip(header.payload_size.saturating_sub(Self::SIZE))?;

        Ok(Self {
            id: header.id,
            unk1: raw.unk1.get(),
            unk2: raw.unk2.get(),
            width: raw.width.get(),
            height: raw.height.get(),
        })
    }
}

/// One image frame: its compressed stream and, once seen, its header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    stream: Vec<u8>,
    header: Option<ImageHeader>,
}

impl Frame {
    /// Get the compressed stream data.
    pub fn stream(&self) -> &[u8] {
        &self.stream
    }

    /// Get the image header, if the chunk stream contained one.
    pub fn header(&self) -> Option<&ImageHeader> {
        self.header.as_ref()
    }

    /// Get the frame size as (width, height).
    pub fn dimensions(&self) -> Option<(u16, u16)> {
        self.header.map(|h| (h.width, h.height))
    }
}

/// Map a chunk id to its frame index.
///
/// Ids carrying the `CSTM` prefix lose it; smaller ids already are indices.
pub fn frame_index(id: u32) -> u32 {
    id.checked_sub(CSTM_ID_BIAS).unwrap_or(id)
}

/// Frames under construction while the chunk stream is read.
#[derive(Debug, Default)]
struct FrameAccumulator {
    frames: BTreeMap<u32, Frame>,
}

impl FrameAccumulator {
    fn add_stream(&mut self, index: u32, stream: Vec<u8>) {
        self.frames.entry(index).or_default().stream = stream;
    }

    fn add_header(&mut self, index: u32, header: ImageHeader) -> Result<()> {
        let frame = self
            .frames
            .get_mut(&index)
            .ok_or(Error::UnmatchedImageHeader { frame: index })?;
        frame.header = Some(header);
        Ok(())
    }

    fn finish(self) -> BTreeMap<u32, Frame> {
        self.frames
    }
}

/// A decoded collection of image frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rlep {
    rlid: Option<RawChunk>,
    ctab: Option<RawChunk>,
    frames: BTreeMap<u32, Frame>,
}

impl Rlep {
    /// Read an RLEP chunk stream up to its end marker or the cursor's end.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let mut rlid = None;
        let mut ctab = None;
        let mut frames = FrameAccumulator::default();

        while cursor.remaining() >= ChunkMagic::SIZE {
            let start = cursor.position();
            let magic = ChunkMagic(cursor.read_array()?);
            if magic == ChunkMagic::END || cursor.is_empty() {
                break;
            }

            let header = ChunkHeader::read(cursor, magic, start)?;
            log::trace!(
                "Reading {} chunk {:#010x} ({} byte payload)",
                magic,
                header.id,
                header.payload_size
            );

            match magic {
                ChunkMagic::RLID => {
                    if rlid.replace(RawChunk::read(cursor, &header)?).is_some() {
                        log::warn!("Duplicate RLID chunk at offset {}, keeping the last", start);
                    }
                }
                ChunkMagic::CTAB => {
                    if ctab.replace(RawChunk::read(cursor, &header)?).is_some() {
                        log::warn!("Duplicate CTAB chunk at offset {}, keeping the last", start);
                    }
                }
                ChunkMagic::CSTM => {
                    let stream = cursor.read_bytes(header.payload_size)?.to_vec();
                    frames.add_stream(frame_index(header.id), stream);
                }
                ChunkMagic::IHDR => {
                    let image_header = ImageHeader::read(cursor, &header)?;
                    frames.add_header(frame_index(header.id), image_header)?;
                }
                other => return Err(Error::UnknownChunk(other)),
            }
        }

        Ok(Self {
            rlid,
            ctab,
            frames: frames.finish(),
        })
    }

    /// Get the `RLID` chunk.
    pub fn rlid(&self) -> Option<&RawChunk> {
        self.rlid.as_ref()
    }

    /// Get the `CTAB` color table chunk.
    pub fn ctab(&self) -> Option<&RawChunk> {
        self.ctab.as_ref()
    }

    /// Get the frames keyed by frame index.
    pub fn frames(&self) -> &BTreeMap<u32, Frame> {
        &self.frames
    }

    /// Get a frame by index.
    pub fn frame(&self, index: u32) -> Option<&Frame> {
        self.frames.get(&index)
    }
}
