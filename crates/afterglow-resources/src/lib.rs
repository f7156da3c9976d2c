//! Resource decoders for After Dark screensaver modules.
//!
//! An After Dark module is a 16-bit Windows executable whose resources
//! describe what the engine shows for it (control panel options, credit and
//! about text) and what the module draws (palettes, image configuration and
//! compressed image frames). This crate decodes those resources from bytes
//! already extracted by an executable container parser.
//!
//! # Resource Types
//!
//! | Tag          | Record                      |
//! |--------------|-----------------------------|
//! | 1000         | [`Control`]                 |
//! | 2000         | [`EngineString`]            |
//! | 3000         | sound, not decoded          |
//! | `PAL`        | [`Palette`]                 |
//! | `RDAT`       | [`Rdat`]                    |
//! | `RLEP`       | [`Rlep`]                    |
//! | `STRINGLIST` | [`StringList`]              |
//!
//! Modules without descriptive type names use arbitrary numeric tags for
//! the last four; those are identified by [`classify`].
//!
//! # Example
//!
//! ```
//! use afterglow_resources::{ModuleResources, ResourceDecoderRegistry, ResourceHandle, TypeTag};
//!
//! let name = b"Flying Toasters\0";
//! let handles = vec![ResourceHandle::new(TypeTag::Numeric(2000), 20, name)];
//!
//! let module = ModuleResources::assemble(handles, &ResourceDecoderRegistry::new());
//! assert_eq!(module.name(), Some("Flying Toasters"));
//! assert!(module.failures().is_empty());
//! ```

mod error;
mod handle;
mod module;
mod registry;

pub mod classify;
pub mod records;

pub use classify::classify;
pub use error::{Error, ErrorKind, Result};
pub use handle::{ResourceHandle, ResourceType, TypeTag};
pub use module::{DecodeFailure, ModuleResources};
pub use registry::{DecodeFn, Resource, ResourceDecoderRegistry};

// Re-export commonly used types at crate root
pub use records::{
    Control, ControlKind, EngineString, EngineStringRole, Palette, Rdat, Rlep, StringList, Widget,
};
