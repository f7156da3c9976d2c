//! Afterglow - After Dark screensaver module resource decoding library.
//!
//! This crate provides a unified interface to the Afterglow crates for
//! reading the resources of legacy After Dark modules without the original
//! engine.
//!
//! # Crates
//!
//! - [`afterglow_common`] - Byte cursor and Latin-1 field codecs
//! - [`afterglow_resources`] - Resource decoders, type classification and
//!   module assembly
//!
//! # Example
//!
//! ```
//! use afterglow::prelude::*;
//!
//! // Handles normally come from an executable resource table parser.
//! let empty_slot = [0u8; 32];
//! let handles = vec![ResourceHandle::new(TypeTag::Numeric(1000), 0, &empty_slot)];
//!
//! let module = ModuleResources::assemble(handles, &ResourceDecoderRegistry::new());
//! assert_eq!(module.controls()[&0].kind(), ControlKind::None);
//! module.verify_image_pairs()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use afterglow_common as common;
pub use afterglow_resources as resources;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use afterglow_common::ByteCursor;
    pub use afterglow_resources::records::{
        CheckBox, ComboBox, CommandButton, Frame, NumericSlider, StringSlider, Widget,
    };
    pub use afterglow_resources::{
        classify, Control, ControlKind, EngineString, EngineStringRole, ModuleResources, Palette,
        Rdat, Resource, ResourceDecoderRegistry, ResourceHandle, ResourceType, Rlep, StringList,
        TypeTag,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
