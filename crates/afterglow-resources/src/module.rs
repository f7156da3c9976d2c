//! Whole-module assembly.
//!
//! [`ModuleResources`] takes every resource handle the container parser found
//! in a module, works out which decoder each group needs, decodes everything
//! and files the results by type and id.

use std::collections::BTreeMap;

use crate::classify::classify_group;
use crate::records::{Control, EngineString, EngineStringRole, Palette, Rdat, Rlep, StringList};
use crate::registry::{Resource, ResourceDecoderRegistry};
use crate::{Error, ResourceHandle, ResourceType, Result, TypeTag};

/// A resource that failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub tag: TypeTag,
    pub id: u16,
    pub resource_type: ResourceType,
    pub error: Error,
}

/// All decoded resources of one module.
#[derive(Debug, Clone, Default)]
pub struct ModuleResources {
    engine_strings: BTreeMap<u16, EngineString>,
    controls: BTreeMap<u16, Control>,
    palettes: BTreeMap<u16, Palette>,
    string_lists: BTreeMap<u16, StringList>,
    image_configs: BTreeMap<u16, Rdat>,
    images: BTreeMap<u16, Rlep>,
    sounds: Vec<u16>,
    unclassified: Vec<TypeTag>,
    ignored: Vec<TypeTag>,
    failures: Vec<DecodeFailure>,
    heuristic: bool,
}

impl ModuleResources {
    /// Decode every resource of a module.
    ///
    /// Resources are grouped by type tag. If no group has a descriptive type
    /// name, groups with numbers other than the fixed engine tags are
    /// classified by signature instead. A resource that fails to decode is
    /// recorded in [`failures`](Self::failures) and does not affect the rest.
    pub fn assemble<'a, I>(handles: I, registry: &ResourceDecoderRegistry) -> Self
    where
        I: IntoIterator<Item = ResourceHandle<'a>>,
    {
        let groups = group_by_tag(handles);
        let mut module = Self {
            heuristic: !groups.iter().any(|(tag, _)| tag.is_name()),
            ..Self::default()
        };

        if module.heuristic && !groups.is_empty() {
            log::warn!(
                "Resources were not given names in the executable. Using heuristics to identify resources."
            );
        }

        for (tag, group) in &groups {
            let Some(resource_type) = module.resolve(tag, group) else {
                if module.heuristic {
                    log::warn!("Could not identify resource group {} ({} resources)", tag, group.len());
                    module.unclassified.push(tag.clone());
                } else {
                    log::debug!("Skipping resource group {} ({} resources)", tag, group.len());
                    module.ignored.push(tag.clone());
                }
                continue;
            };

            for handle in group {
                match registry.decode(resource_type, handle) {
                    Some(Ok(resource)) => module.insert(handle.id, resource),
                    Some(Err(error)) => {
                        log::warn!("Failed to decode {} resource {}: {}", tag, handle.id, error);
                        module.failures.push(DecodeFailure {
                            tag: tag.clone(),
                            id: handle.id,
                            resource_type,
                            error,
                        });
                    }
                    None if resource_type == ResourceType::Wav => module.sounds.push(handle.id),
                    None => {
                        log::debug!("No decoder for {:?}, skipping {} resource {}", resource_type, tag, handle.id);
                    }
                }
            }
        }

        module
    }

    /// Work out the type of a resource group.
    fn resolve(&self, tag: &TypeTag, group: &[ResourceHandle<'_>]) -> Option<ResourceType> {
        if let Some(resource_type) = ResourceType::from_tag(tag) {
            return Some(resource_type);
        }
        if !self.heuristic {
            return None;
        }

        let resource_type = classify_group(group)?;
        log::debug!("Classified resource group {} as {:?}", tag, resource_type);
        Some(resource_type)
    }

    fn insert(&mut self, id: u16, resource: Resource) {
        match resource {
            Resource::Control(control) => {
                self.controls.insert(id, control);
            }
            Resource::EngineString(string) => {
                self.engine_strings.insert(id, string);
            }
            Resource::StringList(list) => {
                self.string_lists.insert(id, list);
            }
            Resource::Palette(palette) => {
                self.palettes.insert(id, palette);
            }
            Resource::ImageConfig(rdat) => {
                self.image_configs.insert(id, rdat);
            }
            Resource::Images(rlep) => {
                self.images.insert(id, rlep);
            }
        }
    }

    /// Get the engine string for a role.
    pub fn engine_string(&self, role: EngineStringRole) -> Option<&EngineString> {
        self.engine_strings.get(&role.id())
    }

    /// Get the credit string.
    pub fn credit(&self) -> Option<&str> {
        self.engine_string(EngineStringRole::Credit).map(EngineString::text)
    }

    /// Get the module name.
    pub fn name(&self) -> Option<&str> {
        self.engine_string(EngineStringRole::Name).map(EngineString::text)
    }

    /// Get the about box text.
    pub fn about(&self) -> Option<&str> {
        self.engine_string(EngineStringRole::About).map(EngineString::text)
    }

    /// Get all engine strings keyed by id, including ids with no known role.
    pub fn engine_strings(&self) -> &BTreeMap<u16, EngineString> {
        &self.engine_strings
    }

    /// Get the controls keyed by panel position.
    pub fn controls(&self) -> &BTreeMap<u16, Control> {
        &self.controls
    }

    /// Get the palettes keyed by id.
    pub fn palettes(&self) -> &BTreeMap<u16, Palette> {
        &self.palettes
    }

    /// Get the string lists keyed by id.
    pub fn string_lists(&self) -> &BTreeMap<u16, StringList> {
        &self.string_lists
    }

    /// Get the image configurations keyed by id.
    pub fn image_configs(&self) -> &BTreeMap<u16, Rdat> {
        &self.image_configs
    }

    /// Get the image frame sets keyed by id.
    pub fn images(&self) -> &BTreeMap<u16, Rlep> {
        &self.images
    }

    /// Get the ids of sound resources, which are not decoded.
    pub fn sounds(&self) -> &[u16] {
        &self.sounds
    }

    /// Get the resource groups whose signature matched no known type.
    ///
    /// Only filled when types were identified by signature.
    pub fn unclassified(&self) -> &[TypeTag] {
        &self.unclassified
    }

    /// Get the resource groups skipped because their tag names no type
    /// decoded here, such as icons or version info.
    pub fn ignored(&self) -> &[TypeTag] {
        &self.ignored
    }

    /// Get the resources that failed to decode.
    pub fn failures(&self) -> &[DecodeFailure] {
        &self.failures
    }

    /// Check if resource types were identified by signature.
    pub fn used_heuristics(&self) -> bool {
        self.heuristic
    }

    /// Check that every image configuration has image frames with the same
    /// id, and vice versa.
    pub fn verify_image_pairs(&self) -> Result<()> {
        let configs_only: Vec<u16> = self
            .image_configs
            .keys()
            .filter(|id| !self.images.contains_key(*id))
            .copied()
            .collect();
        let images_only: Vec<u16> = self
            .images
            .keys()
            .filter(|id| !self.image_configs.contains_key(*id))
            .copied()
            .collect();

        if configs_only.is_empty() && images_only.is_empty() {
            Ok(())
        } else {
            Err(Error::ImageKeyMismatch {
                configs_only,
                images_only,
            })
        }
    }
}

/// Group handles by type tag, keeping first-seen order of groups and handles.
fn group_by_tag<'a, I>(handles: I) -> Vec<(TypeTag, Vec<ResourceHandle<'a>>)>
where
    I: IntoIterator<Item = ResourceHandle<'a>>,
{
    let mut groups: Vec<(TypeTag, Vec<ResourceHandle<'a>>)> = Vec::new();
    for handle in handles {
        match groups.iter_mut().find(|(tag, _)| *tag == handle.tag) {
            Some((_, group)) => group.push(handle),
            None => groups.push((handle.tag.clone(), vec![handle])),
        }
    }
    groups
}
