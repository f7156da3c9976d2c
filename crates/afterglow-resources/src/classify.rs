//! Signature-based resource type detection.
//!
//! Used only when a module gives none of its resource groups a descriptive
//! type name. The numeric type ids such modules use are inconsistent across
//! modules, so the data itself is inspected instead. This is best effort: a
//! group whose signature is not recognised stays unclassified and is reported
//! rather than guessed at.

use crate::{ResourceHandle, ResourceType};

/// Leading bytes of an RLEP chunk stream.
pub const IMAGES_SIGNATURE: [u8; 4] = *b"RLID";

/// Leading bytes of an RDAT resource.
pub const IMAGE_CONFIG_SIGNATURE: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

/// Leading bytes of a palette.
pub const PALETTE_SIGNATURE: [u8; 4] = [0x00, 0x03, 0x00, 0x00];

/// Classify a resource by its first four bytes.
///
/// Returns `None` when the signature is unknown or fewer than four bytes are
/// given.
pub fn classify(bytes: &[u8]) -> Option<ResourceType> {
    let signature: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
    match signature {
        IMAGES_SIGNATURE => Some(ResourceType::Images),
        IMAGE_CONFIG_SIGNATURE => Some(ResourceType::ImageConfig),
        PALETTE_SIGNATURE => Some(ResourceType::Palette),
        _ => None,
    }
}

/// Classify a resource group by the signature of its first resource.
pub fn classify_group(group: &[ResourceHandle<'_>]) -> Option<ResourceType> {
    let signature = group.first()?.signature()?;
    classify(&signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeTag;

    #[test]
    fn test_known_signatures() {
        assert_eq!(classify(b"RLID\x00\x00\x00\x01"), Some(ResourceType::Images));
        assert_eq!(classify(&[0, 0, 0, 0, 5]), Some(ResourceType::ImageConfig));
        assert_eq!(classify(&[0, 3, 0, 0, 0x10, 0]), Some(ResourceType::Palette));
    }

    #[test]
    fn test_unknown_signature() {
        assert_eq!(classify(b"MZ\x90\x00"), None);
        assert_eq!(classify(b"RLI"), None);
        assert_eq!(classify(&[]), None);
    }

    #[test]
    fn test_numeric_tag_is_ignored() {
        let data = b"RLID\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00\x00\x10";
        let baddog = [ResourceHandle::new(TypeTag::Numeric(32513), 1, data)];
        let toilet = [ResourceHandle::new(TypeTag::Numeric(32516), 1, data)];

        assert_eq!(classify_group(&baddog), Some(ResourceType::Images));
        assert_eq!(classify_group(&toilet), Some(ResourceType::Images));
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(classify_group(&[]), None);
    }
}
