//! Decoded resource records.
//!
//! Each record type has a `read` constructor that consumes one resource from
//! a [`ByteCursor`](afterglow_common::ByteCursor) and either returns the fully
//! built record or an error. Nothing is returned for a partly decoded resource.
//!
//! # Record Overview
//!
//! - [`Control`]: An option on the engine's control panel (slider, combo box,
//!   button or check box), or an empty slot
//! - [`EngineString`]: Credit, name or about text shown by the engine
//! - [`StringList`]: A counted list of C strings used by the module
//! - [`Palette`]: RGB color definitions
//! - [`Rdat`]: Image configuration, a sentinel-terminated list of chunks
//! - [`Rlep`]: Image frames, a stream of tagged chunks
//!
//! # Byte Order
//!
//! Everything is little-endian except the RLEP chunk stream, which is
//! big-endian throughout.

mod control;
mod engine_string;
mod palette;
mod rdat;
mod rlep;
mod string_list;

pub use control::{
    CheckBox, ComboBox, CommandButton, Control, ControlKind, NumericSlider, SliderEntry,
    SliderSelection, StringPosition, StringSlider, Widget, MAX_SLIDER_POSITION,
};
pub use engine_string::{EngineString, EngineStringRole};
pub use palette::{Palette, Rgb};
pub use rdat::{Rdat, RdatChunk};
pub use rlep::{frame_index, ChunkMagic, Frame, ImageHeader, RawChunk, Rlep, CSTM_ID_BIAS};
pub use string_list::StringList;
