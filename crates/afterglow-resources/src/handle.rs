//! Resource type tags and handles.
//!
//! The container parser hands over each resource as a [`ResourceHandle`]:
//! the type tag of its group, its id, and its bytes up to a declared end
//! offset.
//!
//! Type tags come in two forms. Engine-facing resources use fixed numbers
//! (1000 for controls, 2000 for engine strings). Internal resources sometimes
//! get descriptive names like `RLEP`, but most modules give them high
//! numbers instead, and those numbers differ between modules: BADDOG.AD
//! gives palettes type 32513 while TOILET.AD uses 32516. Such numbers are
//! never trusted; see [`classify`](crate::classify).

use std::fmt;

use afterglow_common::ByteCursor;

use crate::Result;

/// The type tag of a resource group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TypeTag {
    /// A numeric type id.
    Numeric(u16),
    /// A descriptive type name.
    Name(String),
}

impl TypeTag {
    /// Check if this is a descriptive name.
    pub fn is_name(&self) -> bool {
        matches!(self, TypeTag::Name(_))
    }
}

impl From<u16> for TypeTag {
    fn from(value: u16) -> Self {
        TypeTag::Numeric(value)
    }
}

impl From<&str> for TypeTag {
    fn from(value: &str) -> Self {
        TypeTag::Name(value.to_string())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Numeric(id) => write!(f, "#{}", id),
            TypeTag::Name(name) => f.write_str(name),
        }
    }
}

/// The kinds of resource a module carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ResourceType {
    /// Control panel option (tag 1000).
    Control,
    /// Credit, name or about text (tag 2000).
    EngineString,
    /// Sound, used internally (tag 3000). Not decoded.
    Wav,
    /// Color palette (`PAL`).
    Palette,
    /// Image configuration (`RDAT`).
    ImageConfig,
    /// Image frames (`RLEP`).
    Images,
    /// List of C strings (`STRINGLIST`).
    StringList,
}

impl ResourceType {
    pub const CONTROL_TAG: u16 = 1000;
    pub const ENGINE_STRING_TAG: u16 = 2000;
    pub const WAV_TAG: u16 = 3000;

    pub const PALETTE_NAME: &'static str = "PAL";
    pub const IMAGE_CONFIG_NAME: &'static str = "RDAT";
    pub const IMAGES_NAME: &'static str = "RLEP";
    pub const STRING_LIST_NAME: &'static str = "STRINGLIST";

    /// Resolve a type tag. Unknown numbers and names give `None`.
    pub fn from_tag(tag: &TypeTag) -> Option<Self> {
        match tag {
            TypeTag::Numeric(id) => Self::from_numeric(*id),
            TypeTag::Name(name) => Self::from_name(name),
        }
    }

    /// Resolve one of the fixed numeric tags.
    pub fn from_numeric(id: u16) -> Option<Self> {
        match id {
            Self::CONTROL_TAG => Some(Self::Control),
            Self::ENGINE_STRING_TAG => Some(Self::EngineString),
            Self::WAV_TAG => Some(Self::Wav),
            _ => None,
        }
    }

    /// Resolve a descriptive type name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::PALETTE_NAME => Some(Self::Palette),
            Self::IMAGE_CONFIG_NAME => Some(Self::ImageConfig),
            Self::IMAGES_NAME => Some(Self::Images),
            Self::STRING_LIST_NAME => Some(Self::StringList),
            _ => None,
        }
    }
}

/// One resource as supplied by the container parser.
#[derive(Debug, Clone)]
pub struct ResourceHandle<'a> {
    pub tag: TypeTag,
    pub id: u16,
    pub data: &'a [u8],
    /// Offset in `data` where the resource's declared length ends.
    pub end_offset: usize,
}

impl<'a> ResourceHandle<'a> {
    /// Create a handle whose declared end is the end of `data`.
    pub fn new(tag: impl Into<TypeTag>, id: u16, data: &'a [u8]) -> Self {
        Self {
            tag: tag.into(),
            id,
            data,
            end_offset: data.len(),
        }
    }

    /// Set the declared end offset.
    pub fn with_end_offset(mut self, end_offset: usize) -> Self {
        self.end_offset = end_offset;
        self
    }

    /// Get a cursor over the declared bytes.
    pub fn cursor(&self) -> Result<ByteCursor<'a>> {
        Ok(ByteCursor::bounded(self.data, self.end_offset)?)
    }

    /// Get the first bytes of the resource, if it has that many.
    pub fn signature(&self) -> Option<[u8; 4]> {
        self.cursor().ok()?.read_array().ok()
    }
}
