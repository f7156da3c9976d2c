use afterglow_resources::records::Widget;
use afterglow_resources::{
    ControlKind, Error, ErrorKind, ModuleResources, ResourceDecoderRegistry, ResourceHandle,
    ResourceType, TypeTag,
};

fn rlep(frame_id: u32) -> Vec<u8> {
    fn chunk(magic: &[u8; 4], id: u32, payload: &[u8]) -> Vec<u8> {
        let mut bytes = magic.to_vec();
        bytes.extend(id.to_be_bytes());
        bytes.extend(0u32.to_be_bytes());
        bytes.extend(((16 + payload.len()) as u32).to_be_bytes());
        bytes.extend(payload);
        bytes
    }

    let mut ihdr = vec![0u8; 8];
    ihdr.extend(32u16.to_be_bytes());
    ihdr.extend(24u16.to_be_bytes());

    let mut data = chunk(b"RLID", 1, b"id");
    data.extend(chunk(b"CSTM", 0x5F01_0000 + frame_id, b"pixels"));
    data.extend(chunk(b"IHDR", frame_id, &ihdr));
    data.extend([0u8; 16]);
    data
}

fn rdat(last_id: u16, ids: &[u16]) -> Vec<u8> {
    let mut data = vec![0, 0];
    data.extend(last_id.to_le_bytes());
    for id in ids {
        data.extend(id.to_le_bytes());
        data.extend([0u8; 8]);
    }
    data
}

fn palette() -> Vec<u8> {
    vec![0x00, 0x03, 0x02, 0x00, 1, 2, 3, 0, 4, 5, 6, 0]
}

fn empty_palette() -> Vec<u8> {
    vec![0x00, 0x03, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00]
}

fn check_box(title: &str) -> Vec<u8> {
    let mut data = 5u16.to_le_bytes().to_vec();
    let mut field = title.as_bytes().to_vec();
    field.resize(15, 0);
    data.extend(field);
    data.extend([0u8; 7]);
    data.extend(1u16.to_le_bytes());
    data.extend([0u8; 6]);
    data
}

#[test]
fn assembles_module_with_descriptive_names() {
    let credit = b"(c) 1991 Berkeley Systems\0";
    let name = b"Flying Toasters\0\0\0";
    let about = b"Toasters with wings.\0";
    let empty_control = [0u8; 32];
    let sound_control = check_box("Sound");
    let frames = rlep(0);
    let config = rdat(3, &[1, 2, 3]);
    let colors = palette();
    let strings = b"\x02\x00toast\0bagel\0";
    let wav = b"RIFF....WAVE";

    let handles = vec![
        ResourceHandle::new(TypeTag::Numeric(2000), 10, credit),
        ResourceHandle::new(TypeTag::Numeric(2000), 20, name),
        ResourceHandle::new(TypeTag::Numeric(2000), 30, about),
        ResourceHandle::new(TypeTag::Numeric(1000), 0, &sound_control),
        ResourceHandle::new(TypeTag::Numeric(1000), 1, &empty_control),
        ResourceHandle::new(TypeTag::Numeric(3000), 1, wav),
        ResourceHandle::new("RLEP", 100, &frames),
        ResourceHandle::new("RDAT", 100, &config),
        ResourceHandle::new("PAL", 1, &colors),
        ResourceHandle::new("STRINGLIST", 1, strings),
    ];

    let module = ModuleResources::assemble(handles, &ResourceDecoderRegistry::new());

    assert!(!module.used_heuristics());
    assert!(module.failures().is_empty());
    assert!(module.unclassified().is_empty());
    assert!(module.ignored().is_empty());

    assert_eq!(module.credit(), Some("(c) 1991 Berkeley Systems"));
    assert_eq!(module.name(), Some("Flying Toasters"));
    assert_eq!(module.about(), Some("Toasters with wings."));

    let controls = module.controls();
    assert_eq!(controls.len(), 2);
    assert_eq!(controls[&0].title(), Some("Sound"));
    assert!(matches!(
        controls[&0].widget(),
        Some(Widget::CheckBox(c)) if c.initially_checked
    ));
    assert_eq!(controls[&1].kind(), ControlKind::None);

    assert_eq!(module.sounds(), [1]);
    assert_eq!(module.palettes()[&1].color_count(), 2);
    assert_eq!(module.string_lists()[&1].strings(), ["toast", "bagel"]);
    assert_eq!(module.image_configs()[&100].chunks().len(), 3);
    assert_eq!(
        module.images()[&100].frame(0).unwrap().dimensions(),
        Some((32, 24))
    );
    assert!(module.verify_image_pairs().is_ok());
}

#[test]
fn classifies_numeric_groups_by_signature() {
    let frames = rlep(2);
    let config = rdat(0, &[0, 5]);
    let colors = empty_palette();
    let icon = b"\x28\x00\x00\x00\x20\x00";

    // Type ids differ from module to module.
    for (image_tag, config_tag, palette_tag) in [(32515, 32514, 32513), (32518, 32517, 32516)] {
        let handles = vec![
            ResourceHandle::new(TypeTag::Numeric(image_tag), 7, &frames),
            ResourceHandle::new(TypeTag::Numeric(config_tag), 7, &config),
            ResourceHandle::new(TypeTag::Numeric(palette_tag), 1, &colors),
            ResourceHandle::new(TypeTag::Numeric(3), 1, icon),
        ];

        let module = ModuleResources::assemble(handles, &ResourceDecoderRegistry::new());

        assert!(module.used_heuristics());
        assert!(module.failures().is_empty());
        assert!(module.images()[&7].frame(2).is_some());
        assert_eq!(module.image_configs()[&7].chunks().len(), 1);
        assert!(module.palettes()[&1].colors().is_empty());
        assert_eq!(module.unclassified(), [TypeTag::Numeric(3)]);
        assert!(module.verify_image_pairs().is_ok());
    }
}

#[test]
fn numeric_groups_not_sniffed_when_names_present() {
    let frames = rlep(0);
    let colors = palette();
    let handles = vec![
        ResourceHandle::new("PAL", 1, &colors),
        ResourceHandle::new(TypeTag::Numeric(32515), 7, &frames),
    ];

    let module = ModuleResources::assemble(handles, &ResourceDecoderRegistry::new());

    assert!(!module.used_heuristics());
    assert!(module.images().is_empty());
    assert!(module.unclassified().is_empty());
    assert_eq!(module.ignored(), [TypeTag::Numeric(32515)]);
}

#[test]
fn failure_does_not_abort_siblings() {
    let good = palette();
    let truncated = &good[..9];
    let bad_control = check_box("Broken")
        .into_iter()
        .enumerate()
        .map(|(i, b)| if i == 0 { 9 } else { b })
        .collect::<Vec<u8>>();
    let good_control = check_box("Fine");

    let handles = vec![
        ResourceHandle::new("PAL", 1, truncated),
        ResourceHandle::new("PAL", 2, &good),
        ResourceHandle::new(TypeTag::Numeric(1000), 0, &bad_control),
        ResourceHandle::new(TypeTag::Numeric(1000), 1, &good_control),
    ];

    let module = ModuleResources::assemble(handles, &ResourceDecoderRegistry::new());

    assert_eq!(module.palettes().keys().copied().collect::<Vec<_>>(), [2]);
    assert_eq!(module.controls().keys().copied().collect::<Vec<_>>(), [1]);

    let failures = module.failures();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0].id, 1);
    assert_eq!(failures[0].resource_type, ResourceType::Palette);
    assert_eq!(failures[0].error.kind(), ErrorKind::TruncatedInput);
    assert_eq!(failures[1].error, Error::UnknownControlTag(9));
}

#[test]
fn reports_unpaired_images() {
    let frames = rlep(0);
    let config = rdat(2, &[1, 2]);
    let handles = vec![
        ResourceHandle::new("RLEP", 100, &frames),
        ResourceHandle::new("RLEP", 101, &frames),
        ResourceHandle::new("RDAT", 100, &config),
        ResourceHandle::new("RDAT", 102, &config),
    ];

    let module = ModuleResources::assemble(handles, &ResourceDecoderRegistry::new());
    let err = module.verify_image_pairs().unwrap_err();

    assert_eq!(
        err,
        Error::ImageKeyMismatch {
            configs_only: vec![102],
            images_only: vec![101],
        }
    );
    assert_eq!(err.kind(), ErrorKind::Inconsistent);
}
