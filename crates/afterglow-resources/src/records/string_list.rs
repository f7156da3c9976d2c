//! Counted lists of C strings.
//!
//! Named after the `STRINGLIST` resource type some modules declare.

use afterglow_common::ByteCursor;

use crate::Result;

/// An ordered list of strings used by the module.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StringList {
    strings: Vec<String>,
}

impl StringList {
    /// Read a u16 count followed by that many null-terminated strings.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let count = cursor.read_u16_le()? as usize;
        let mut strings = Vec::with_capacity(count);
        for _ in 0..count {
            strings.push(cursor.read_cstring()?);
        }

        Ok(Self { strings })
    }

    /// Get the strings in order.
    pub fn strings(&self) -> &[String] {
        &self.strings
    }
}
