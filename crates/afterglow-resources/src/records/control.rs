//! Control panel options.
//!
//! A module declares up to four controls, each shown by the engine on its
//! control panel. Every control starts with a little-endian u16 type tag.
//! An empty slot is 32 bytes in total; anything else is followed by a
//! 15-byte title and a layout specific to its type.
//!
//! "Reserved" fields should be nulls, but older modules leave garbage in
//! them, so the engine ignores their content and so do we.

use afterglow_common::ByteCursor;

use crate::{Error, Result};

/// Highest position a slider can resolve to.
pub const MAX_SLIDER_POSITION: u16 = 100;

/// Size of the title field.
const TITLE_SIZE: usize = 0x0f;

/// Bytes following the tag of an empty control.
const NONE_RESERVED: usize = 30;

/// Size of each string in slider and combo box string tables.
const TABLE_STRING_SIZE: usize = 0x10;

/// Size of the numeric slider prefix/suffix string.
const AFFIX_SIZE: usize = 6;

/// Control type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u16)]
pub enum ControlKind {
    None = 0,
    StringSlider = 1,
    NumericSlider = 2,
    ComboBox = 3,
    Button = 4,
    CheckBox = 5,
}

impl TryFrom<u16> for ControlKind {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        Ok(match value {
            0 => ControlKind::None,
            1 => ControlKind::StringSlider,
            2 => ControlKind::NumericSlider,
            3 => ControlKind::ComboBox,
            4 => ControlKind::Button,
            5 => ControlKind::CheckBox,
            other => return Err(Error::UnknownControlTag(other)),
        })
    }
}

/// A control panel option.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Control {
    /// An unused control slot.
    None,
    /// A titled control.
    Widget { title: String, widget: Widget },
}

/// The type-specific part of a titled control.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Widget {
    StringSlider(StringSlider),
    NumericSlider(NumericSlider),
    ComboBox(ComboBox),
    Button(CommandButton),
    CheckBox(CheckBox),
}

impl Control {
    /// Read a control resource.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let kind = ControlKind::try_from(cursor.read_u16_le()?)?;
        let read_widget: fn(&mut ByteCursor<'_>) -> Result<Widget> = match kind {
            ControlKind::None => {
                cursor.skip(NONE_RESERVED)?;
                return Ok(Control::None);
            }
            ControlKind::StringSlider => |c| StringSlider::read(c).map(Widget::StringSlider),
            ControlKind::NumericSlider => |c| NumericSlider::read(c).map(Widget::NumericSlider),
            ControlKind::ComboBox => |c| ComboBox::read(c).map(Widget::ComboBox),
            ControlKind::Button => |c| CommandButton::read(c).map(Widget::Button),
            ControlKind::CheckBox => |c| CheckBox::read(c).map(Widget::CheckBox),
        };

        // Documented as 15 characters plus a terminator, but stored as a
        // null-padded field with no terminator when all 15 are used.
        let title = cursor.read_fixed_string(TITLE_SIZE)?;
        log::trace!("Reading {:?} control {:?}", kind, title);

        let widget = read_widget(cursor)?;
        Ok(Control::Widget { title, widget })
    }

    /// Get the control type tag.
    pub fn kind(&self) -> ControlKind {
        match self {
            Control::None => ControlKind::None,
            Control::Widget { widget, .. } => widget.kind(),
        }
    }

    /// Get the title, if this is not an empty slot.
    pub fn title(&self) -> Option<&str> {
        match self {
            Control::None => None,
            Control::Widget { title, .. } => Some(title),
        }
    }

    /// Get the type-specific payload, if this is not an empty slot.
    pub fn widget(&self) -> Option<&Widget> {
        match self {
            Control::None => None,
            Control::Widget { widget, .. } => Some(widget),
        }
    }
}

impl Widget {
    /// Get the control type tag for this payload.
    pub fn kind(&self) -> ControlKind {
        match self {
            Widget::StringSlider(_) => ControlKind::StringSlider,
            Widget::NumericSlider(_) => ControlKind::NumericSlider,
            Widget::ComboBox(_) => ControlKind::ComboBox,
            Widget::Button(_) => ControlKind::Button,
            Widget::CheckBox(_) => ControlKind::CheckBox,
        }
    }
}

/// One string of a string slider and the bound that selects it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SliderEntry {
    pub label: String,
    pub bound: u16,
}

/// The string shown and value returned for a slider position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderSelection<'a> {
    pub label: &'a str,
    pub value: u16,
}

/// A slider that shows one of a table of strings.
///
/// The slider resolves to a position from 0 to 100. The string shown is
/// taken from the first entry whose bound is greater than the position; past
/// the last bound the last entry stays selected. The value returned is the
/// bound of the entry *before* the selected one, or 0 for the first entry, so
/// the engine only ever returns 0 or one of the declared bounds.
///
/// With entries "First" (bound 10) and "Second" (bound 20):
///
/// | Position | Shown  | Value |
/// |----------|--------|-------|
/// | 0..=9    | First  | 0     |
/// | 10..=100 | Second | 10    |
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StringSlider {
    start_position: u16,
    entries: Vec<SliderEntry>,
}

impl StringSlider {
    /// Create a slider from its entries.
    ///
    /// Fails if any bound lies above [`MAX_SLIDER_POSITION`].
    pub fn new(start_position: u16, entries: Vec<SliderEntry>) -> Result<Self> {
        check_bounds(&entries)?;
        Ok(Self {
            start_position,
            entries,
        })
    }

    /// Read the string slider layout following the title.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        cursor.skip(5)?;
        let count = cursor.read_u16_le()? as usize;
        let start_position = cursor.read_u16_le()?;
        cursor.skip(6)?;

        let mut labels = Vec::with_capacity(count);
        for _ in 0..count {
            labels.push(cursor.read_fixed_string(TABLE_STRING_SIZE)?);
        }

        let mut entries = Vec::with_capacity(count);
        for label in labels {
            let bound = cursor.read_u16_le()?;
            entries.push(SliderEntry { label, bound });
        }

        Self::new(start_position, entries)
    }

    /// Get the initial slider position.
    pub fn start_position(&self) -> u16 {
        self.start_position
    }

    /// Get the (string, bound) entries in declaration order.
    pub fn entries(&self) -> &[SliderEntry] {
        &self.entries
    }

    /// Resolve a slider position to the string shown and the value returned.
    ///
    /// Positions above 100 are treated as 100. Returns `None` for a slider
    /// with no entries.
    pub fn select(&self, position: u16) -> Option<SliderSelection<'_>> {
        let position = position.min(MAX_SLIDER_POSITION);
        let index = self
            .entries
            .iter()
            .position(|entry| entry.bound > position)
            .or_else(|| self.entries.len().checked_sub(1))?;

        let value = index
            .checked_sub(1)
            .map_or(0, |previous| self.entries[previous].bound);

        Some(SliderSelection {
            label: &self.entries[index].label,
            value,
        })
    }
}

fn check_bounds(entries: &[SliderEntry]) -> Result<()> {
    match entries
        .iter()
        .position(|entry| entry.bound > MAX_SLIDER_POSITION)
    {
        Some(index) => Err(Error::SliderBoundOutOfRange {
            index,
            bound: entries[index].bound,
        }),
        None => Ok(()),
    }
}

/// Where a numeric slider shows its string relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StringPosition {
    None,
    Prefix,
    Suffix,
}

impl TryFrom<u16> for StringPosition {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            0 => Ok(StringPosition::None),
            1 => Ok(StringPosition::Prefix),
            2 => Ok(StringPosition::Suffix),
            other => Err(Error::UnknownStringPosition(other)),
        }
    }
}

/// A slider that shows a number. Rarely used by modules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumericSlider {
    pub start_position: u16,
    /// Text shown before or after the number.
    pub affix: String,
    pub lower_bound: u16,
    pub upper_bound: u16,
    pub discrete_positions: u16,
    pub string_position: StringPosition,
}

impl NumericSlider {
    /// Read the numeric slider layout following the title.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        cursor.skip(5)?;
        let start_position = cursor.read_u16_le()?;
        cursor.skip(6)?;
        let affix = cursor.read_fixed_string(AFFIX_SIZE)?;
        cursor.skip(10)?;
        let lower_bound = cursor.read_u16_le()?;
        let upper_bound = cursor.read_u16_le()?;
        let discrete_positions = cursor.read_u16_le()?;
        let string_position = StringPosition::try_from(cursor.read_u16_le()?)?;

        Ok(Self {
            start_position,
            affix,
            lower_bound,
            upper_bound,
            discrete_positions,
            string_position,
        })
    }
}

/// A drop-down list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComboBox {
    pub strings: Vec<String>,
    /// Initially selected entry, as stored.
    pub start_index: u16,
}

impl ComboBox {
    /// Read the combo box layout following the title.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        cursor.skip(5)?;
        let count = cursor.read_u16_le()? as usize;
        let start_index = cursor.read_u16_le()?;
        cursor.skip(6)?;

        let mut strings = Vec::with_capacity(count);
        for _ in 0..count {
            strings.push(cursor.read_fixed_string(TABLE_STRING_SIZE)?);
        }

        Ok(Self {
            strings,
            start_index,
        })
    }
}

/// A button that opens a module dialog. Carries no settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommandButton {
    reserved: [u8; 15],
}

impl CommandButton {
    /// Read the button layout following the title.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        Ok(Self {
            reserved: cursor.read_array()?,
        })
    }

    /// Get the reserved bytes, as stored.
    pub fn reserved(&self) -> &[u8; 15] {
        &self.reserved
    }
}

/// A check box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CheckBox {
    pub initially_checked: bool,
}

impl CheckBox {
    /// Read the check box layout following the title.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        cursor.skip(7)?;
        let initially_checked = cursor.read_u16_le()? == 1;
        cursor.skip(6)?;

        Ok(Self { initially_checked })
    }
}
