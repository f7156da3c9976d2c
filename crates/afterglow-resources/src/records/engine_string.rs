//! Engine strings.
//!
//! Short texts the engine shows about a module: a credit line, the module's
//! name in the module list, and a paragraph for the about box. The resource
//! id says which one a string is; modules rarely use them internally.

use afterglow_common::{text, ByteCursor};

use crate::Result;

/// The role of an engine string, given by its resource id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EngineStringRole {
    /// Usually two lines of authorship and copyright.
    Credit,
    /// Very short; only shown in the module list.
    Name,
    /// A few sentences describing the module.
    About,
}

impl EngineStringRole {
    /// Resource id of the credit string.
    pub const CREDIT_ID: u16 = 10;
    /// Resource id of the module name.
    pub const NAME_ID: u16 = 20;
    /// Resource id of the about box text.
    pub const ABOUT_ID: u16 = 30;

    /// Get the role for a resource id.
    pub fn from_id(id: u16) -> Option<Self> {
        match id {
            Self::CREDIT_ID => Some(Self::Credit),
            Self::NAME_ID => Some(Self::Name),
            Self::ABOUT_ID => Some(Self::About),
            _ => None,
        }
    }

    /// Get the resource id for this role.
    pub fn id(self) -> u16 {
        match self {
            Self::Credit => Self::CREDIT_ID,
            Self::Name => Self::NAME_ID,
            Self::About => Self::ABOUT_ID,
        }
    }
}

/// A string shown by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EngineString {
    text: String,
}

impl EngineString {
    /// Read an engine string spanning the rest of the resource.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let bytes = cursor.read_bytes(cursor.remaining())?;
        Ok(Self {
            text: text::decode_latin1(text::trim_trailing_nulls(bytes)),
        })
    }

    /// Get the decoded text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for EngineString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_to_declared_end() {
        let data = b"Flying Toasters\0\0\0trailing";
        let mut cursor = ByteCursor::bounded(data, 18).unwrap();

        let string = EngineString::read(&mut cursor).unwrap();
        assert_eq!(string.text(), "Flying Toasters");
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_role_ids() {
        assert_eq!(EngineStringRole::from_id(10), Some(EngineStringRole::Credit));
        assert_eq!(EngineStringRole::from_id(20), Some(EngineStringRole::Name));
        assert_eq!(EngineStringRole::from_id(30), Some(EngineStringRole::About));
        assert_eq!(EngineStringRole::from_id(40), None);
        assert_eq!(EngineStringRole::About.id(), 30);
    }
}
