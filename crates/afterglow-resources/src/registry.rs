//! Mapping from resource types to decoders.

use std::collections::HashMap;

use afterglow_common::ByteCursor;

use crate::records::{Control, EngineString, Palette, Rdat, Rlep, StringList};
use crate::{ResourceHandle, ResourceType, Result};

/// A decoded resource.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Resource {
    Control(Control),
    EngineString(EngineString),
    StringList(StringList),
    Palette(Palette),
    ImageConfig(Rdat),
    Images(Rlep),
}

impl Resource {
    /// Get the type of this resource.
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Resource::Control(_) => ResourceType::Control,
            Resource::EngineString(_) => ResourceType::EngineString,
            Resource::StringList(_) => ResourceType::StringList,
            Resource::Palette(_) => ResourceType::Palette,
            Resource::ImageConfig(_) => ResourceType::ImageConfig,
            Resource::Images(_) => ResourceType::Images,
        }
    }
}

/// A decoder for one resource type.
///
/// The cursor covers exactly the resource's declared bytes.
pub type DecodeFn = fn(&mut ByteCursor<'_>) -> Result<Resource>;

/// Registry of decoders keyed by resource type.
///
/// Decoders are pure functions of the resource bytes, so a registry can be
/// shared freely and resources decoded in any order.
#[derive(Clone)]
pub struct ResourceDecoderRegistry {
    decoders: HashMap<ResourceType, DecodeFn>,
}

impl std::fmt::Debug for ResourceDecoderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<_> = self.decoders.keys().collect();
        types.sort();
        f.debug_struct("ResourceDecoderRegistry")
            .field("types", &types)
            .finish()
    }
}

impl Default for ResourceDecoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceDecoderRegistry {
    /// Create a registry with all built-in decoders.
    ///
    /// `Wav` has no decoder; sound extraction is left to other tools.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(ResourceType::Control, |c| {
            Control::read(c).map(Resource::Control)
        });
        registry.register(ResourceType::EngineString, |c| {
            EngineString::read(c).map(Resource::EngineString)
        });
        registry.register(ResourceType::StringList, |c| {
            StringList::read(c).map(Resource::StringList)
        });
        registry.register(ResourceType::Palette, |c| {
            Palette::read(c).map(Resource::Palette)
        });
        registry.register(ResourceType::ImageConfig, |c| {
            Rdat::read(c).map(Resource::ImageConfig)
        });
        registry.register(ResourceType::Images, |c| Rlep::read(c).map(Resource::Images));
        registry
    }

    /// Create a registry with no decoders.
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register a decoder, returning the one it replaces.
    pub fn register(&mut self, resource_type: ResourceType, decoder: DecodeFn) -> Option<DecodeFn> {
        self.decoders.insert(resource_type, decoder)
    }

    /// Get the decoder for a resource type.
    pub fn decoder(&self, resource_type: ResourceType) -> Option<DecodeFn> {
        self.decoders.get(&resource_type).copied()
    }

    /// Check if a resource type has a decoder.
    pub fn can_decode(&self, resource_type: ResourceType) -> bool {
        self.decoders.contains_key(&resource_type)
    }

    /// Decode one resource as the given type.
    ///
    /// Returns `None` if no decoder is registered for the type.
    pub fn decode(
        &self,
        resource_type: ResourceType,
        handle: &ResourceHandle<'_>,
    ) -> Option<Result<Resource>> {
        let decoder = self.decoder(resource_type)?;
        log::debug!(
            "Decoding {} resource {} as {:?}",
            handle.tag,
            handle.id,
            resource_type
        );
        Some(handle.cursor().and_then(|mut cursor| decoder(&mut cursor)))
    }

    /// Decode a batch of resources of one type, in order.
    pub fn decode_all(
        &self,
        resource_type: ResourceType,
        handles: &[ResourceHandle<'_>],
    ) -> Vec<Option<Result<Resource>>> {
        handles
            .iter()
            .map(|handle| self.decode(resource_type, handle))
            .collect()
    }

    /// Decode a batch of resources of one type on rayon's thread pool.
    ///
    /// Results are returned in input order.
    #[cfg(feature = "parallel")]
    pub fn decode_all_par(
        &self,
        resource_type: ResourceType,
        handles: &[ResourceHandle<'_>],
    ) -> Vec<Option<Result<Resource>>> {
        use rayon::prelude::*;

        handles
            .par_iter()
            .map(|handle| self.decode(resource_type, handle))
            .collect()
    }
}
