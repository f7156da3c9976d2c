//! Color palettes.
//!
//! A palette is a u16 of unknown meaning, a u16 color count, then one 4-byte
//! entry per color: red, green, blue and a padding byte.
//!
//! The count is trusted as declared. Some modules store more entries than
//! the count says; those trailing entries are not read.

use afterglow_common::ByteCursor;

use crate::Result;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A module color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Palette {
    unk1: u16,
    colors: Vec<Rgb>,
}

impl Palette {
    /// Read a palette resource.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let unk1 = cursor.read_u16_le()?;
        let color_count = cursor.read_u16_le()? as usize;

        let mut colors = Vec::with_capacity(color_count);
        for _ in 0..color_count {
            let [r, g, b, _padding] = cursor.read_array::<4>()?;
            colors.push(Rgb { r, g, b });
        }

        Ok(Self { unk1, colors })
    }

    /// Get the unidentified leading field.
    pub fn unk1(&self) -> u16 {
        self.unk1
    }

    /// Get the declared color count.
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Get the colors in palette order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Get the colors as packed RGB triples.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| [c.r, c.g, c.b]).collect()
    }
}
