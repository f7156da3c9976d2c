//! Error types for resource decoding.

use thiserror::Error;

use crate::records::ChunkMagic;

/// Errors that can occur when decoding a module's resources.
///
/// Every variant except [`Error::ImageKeyMismatch`] is fatal to the single
/// resource being decoded; sibling resources are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input ended early (common library error).
    #[error("{0}")]
    Common(#[from] afterglow_common::Error),

    /// Control tag outside the known set.
    #[error("unknown control type: {0}")]
    UnknownControlTag(u16),

    /// Numeric slider string position outside the known set.
    #[error("unknown numeric slider string position: {0}")]
    UnknownStringPosition(u16),

    /// RLEP chunk magic outside the known set.
    #[error("unknown RLEP chunk type: {0}")]
    UnknownChunk(ChunkMagic),

    /// String slider bound above the maximum slider position.
    #[error("slider bound {bound} at index {index} exceeds 100")]
    SliderBoundOutOfRange { index: usize, bound: u16 },

    /// A chunk declared a length shorter than its own header.
    #[error("{magic} chunk declares length {length}, shorter than its {header} byte header")]
    ChunkTooShort {
        magic: ChunkMagic,
        length: u32,
        header: usize,
    },

    /// An IHDR chunk arrived before any CSTM chunk for the same frame.
    #[error("IHDR chunk for frame {frame} has no preceding CSTM chunk")]
    UnmatchedImageHeader { frame: u32 },

    /// Image configs and image frame sets are not keyed identically.
    #[error("image configs and images disagree: configs only {configs_only:?}, images only {images_only:?}")]
    ImageKeyMismatch {
        configs_only: Vec<u16>,
        images_only: Vec<u16>,
    },
}

/// Broad classification of decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The cursor ran past the available bytes or the declared end offset.
    TruncatedInput,
    /// A tag, mode or chunk magic outside its enumerated set.
    UnrecognizedTag,
    /// A value outside its permitted range.
    OutOfRangeValue,
    /// A chunk referring to an entry that does not exist yet.
    UnmatchedReference,
    /// Decoded resources disagree with each other.
    Inconsistent,
}

impl Error {
    /// Get the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Common(_) => ErrorKind::TruncatedInput,
            Error::UnknownControlTag(_)
            | Error::UnknownStringPosition(_)
            | Error::UnknownChunk(_) => ErrorKind::UnrecognizedTag,
            Error::SliderBoundOutOfRange { .. } | Error::ChunkTooShort { .. } => {
                ErrorKind::OutOfRangeValue
            }
            Error::UnmatchedImageHeader { .. } => ErrorKind::UnmatchedReference,
            Error::ImageKeyMismatch { .. } => ErrorKind::Inconsistent,
        }
    }
}

/// Result type for resource decoding.
pub type Result<T> = std::result::Result<T, Error>;
