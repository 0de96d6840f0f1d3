
use std::fs;

use scancfg::image::{MockImageBuilder, crc32};
use scancfg::prelude::*;
use scancfg::{BuildEntry, RegistryFile, ScannerMap, storage};
use tempfile::TempDir;

const EVENT_TABLE: u32 = 0x100000;
const COUNT_CELL: u32 = 0x100040;
const HASH_TABLE: u32 = 0x100080;
const CONFIG_TABLE: u32 = 0x100100;
const STRINGS: u32 = 0x100400;

fn scanners() -> ScannerMap {
    [
        (0x2D4FD0, "TypeChanged"),
        (0x2D5098, "DigitalDown"),
        (0x2D55D0, "DigitalSteer"),
        (0x2D5B68, "Analog"),
    ]
    .into_iter()
    .collect()
}

fn layout(codec: CodecKind) -> ImageLayout {
    ImageLayout {
        title: format!("synthetic {}", codec),
        codec,
        event_names: EVENT_TABLE,
        num_event_names: 3,
        scanner_configs: CONFIG_TABLE,
        num_scanner_configs: COUNT_CELL,
        scanners: scanners(),
        button_action_hashes: (codec == CodecKind::Underground).then_some(HASH_TABLE),
    }
}

/// Image with three event names, three records and a four-entry hash table
fn build_image(codec: CodecKind) -> Vec<u8> {
    let size = codec.record_size() as u32;
    let button_word = size - 4;

    MockImageBuilder::new(0x800)
        .with_u32(EVENT_TABLE, 1)
        .with_u32(EVENT_TABLE + 4, STRINGS)
        .with_u32(EVENT_TABLE + 8, 2)
        .with_u32(EVENT_TABLE + 12, STRINGS + 0x20)
        .with_u32(EVENT_TABLE + 16, 7)
        .with_u32(EVENT_TABLE + 20, STRINGS + 0x40)
        .with_c_string(STRINGS, "JOY_EVENT_ACCELERATE")
        .with_c_string(STRINGS + 0x20, "JOY_EVENT_BRAKE")
        .with_c_string(STRINGS + 0x40, "JOY_EVENT_STEER")
        .with_c_string(STRINGS + 0x60, "CROSS")
        .with_u32(COUNT_CELL, 3)
        .with_u32(HASH_TABLE, 0xA1)
        .with_u32(HASH_TABLE + 4, 0xA2)
        .with_u32(HASH_TABLE + 8, 0xA3)
        .with_u32(HASH_TABLE + 12, 0xA4)
        // record 0: accelerate, analog, index/shift packed
        .with_bytes(CONFIG_TABLE, &[0x10, 0xF0])
        .with_u32(CONFIG_TABLE + 8, 1)
        .with_u32(CONFIG_TABLE + 12, 0x2D5B68)
        .with_bytes(CONFIG_TABLE + 16, &[0x01, 0x00, 0x43, 0xE1, 0xFF, 0x02, 0x34, 0x12])
        .with_u32(CONFIG_TABLE + 24, 3)
        .with_u32(CONFIG_TABLE + button_word, STRINGS + 0x60)
        // record 1: unmapped event id, no scanner
        .with_bytes(CONFIG_TABLE + size, &[0, 0, 5])
        .with_u32(CONFIG_TABLE + size + 8, 200)
        // record 2: steer
        .with_bytes(CONFIG_TABLE + 2 * size, &[1, 2, 3, 4, 5, 6, 7, 8])
        .with_u32(CONFIG_TABLE + 2 * size + 8, 7)
        .with_u32(CONFIG_TABLE + 2 * size + 12, 0x2D55D0)
        .with_u32(CONFIG_TABLE + 2 * size + 24, 12)
        .build()
}

fn registry_for(image: &[u8], codec: CodecKind) -> Registry {
    Registry::from_file(RegistryFile {
        builds: vec![BuildEntry {
            checksums: vec![crc32(image)],
            layout: layout(codec),
        }],
    })
    .unwrap()
}

#[test]
fn test_dump_edit_patch_hot_pursuit_2() {
    let dir = TempDir::new().unwrap();
    let image = build_image(CodecKind::HotPursuit2);
    let registry = registry_for(&image, CodecKind::HotPursuit2);
    let layout = registry.resolve(&image).unwrap();

    // event names: image -> file -> table
    let names = dump_event_names(&image, layout).unwrap();
    assert_eq!(names.len(), 3);
    let names_path = dir.path().join("event-names.json");
    scancfg::save_event_names(&names_path, &names).unwrap();
    let events = EventNameTable::load(&names_path).unwrap();

    // records: image -> file
    let records = dump_scanner_configs(&image, layout, &events).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].configs, vec![0x10, -0x10]);
    assert_eq!(records[0].index, [2, 7]);
    assert_eq!(records[0].shift, [3, 1]);
    assert_eq!(records[0].invert, -1);
    assert_eq!(records[0].unk16, 0x1234);
    assert_eq!(records[0].glyph, Glyph::List(vec![3]));
    assert_eq!(records[0].button, "CROSS");
    assert_eq!(records[1].configs, vec![0, 0, 5]);
    assert_eq!(records[1].event_name, "JOY_EVENT_UNK_200");
    assert_eq!(records[1].scanner, None);
    assert_eq!(records[2].event_name, "JOY_EVENT_STEER");
    assert_eq!(records[2].glyph, Glyph::List(vec![12]));

    let configs_path = dir.path().join("scanner-configs.json");
    storage::save_json(&configs_path, &records).unwrap();

    // unedited document produces an empty patch
    let reloaded: Vec<ScannerConfigRecord> = storage::load_json(&configs_path).unwrap();
    assert_eq!(reloaded, records);
    let patch = diff_scanner_configs(&image, layout, &events, &reloaded).unwrap();
    assert!(patch.is_empty());

    // edit: change the scanner of record 2 and drop record 1
    let mut edited = reloaded;
    edited[2].scanner = Some("DigitalDown".to_string());
    edited.remove(1);
    let patch = diff_scanner_configs(&image, layout, &events, &edited).unwrap();

    let patch_path = dir.path().join("scanner-configs.pnach");
    patch.save(&patch_path).unwrap();
    let text = fs::read_to_string(&patch_path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "patch=0,EE,20100040,extended,2");
    // record 2 moves into slot 1 (0x100124) and is diffed against the bytes
    // of the old record 1 there
    assert_eq!(
        &lines[1..],
        &[
            "patch=0,EE,20100124,extended,4030201",
            "patch=0,EE,20100128,extended,8070605",
            "patch=0,EE,2010012C,extended,7",
            "patch=0,EE,20100130,extended,2D5098",
            "patch=0,EE,2010013C,extended,C",
        ]
    );
}

#[test]
fn test_dump_edit_patch_underground() {
    let image = build_image(CodecKind::Underground);
    let registry = registry_for(&image, CodecKind::Underground);
    let layout = registry.resolve(&image).unwrap();
    let events = EventNameTable::new(&dump_event_names(&image, layout).unwrap());

    let mut records = dump_scanner_configs(&image, layout, &events).unwrap();
    assert_eq!(records[0].glyph, Glyph::Single(3));
    assert_eq!(records[1].glyph, Glyph::Single(0));
    assert_eq!(records[0].button, "CROSS");

    records[0].shift = [31, 0];
    records[1].event_name = "JOY_EVENT_BRAKE".to_string();
    let patch = diff_scanner_configs(&image, layout, &events, &records).unwrap();

    assert_eq!(
        patch.entries,
        vec![
            // xor 01 00, index/shift 5F E0
            PatchEntry::extended_word(CONFIG_TABLE + 16, u32::from_le_bytes([1, 0, 0x5F, 0xE0])),
            PatchEntry::extended_word(CONFIG_TABLE + 32 + 8, 2),
        ]
    );
}

#[test]
fn test_capacity_exceeded_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let image = build_image(CodecKind::Underground);
    let registry = registry_for(&image, CodecKind::Underground);
    let layout = registry.resolve(&image).unwrap();
    let events = EventNameTable::default();

    let mut records = dump_scanner_configs(&image, layout, &events).unwrap();
    records.push(records[2].clone());

    let patch_path = dir.path().join("out.pnach");
    let result = diff_scanner_configs(&image, layout, &events, &records)
        .and_then(|patch| patch.save(&patch_path));
    assert!(matches!(
        result,
        Err(Error::CapacityExceeded {
            requested: 4,
            capacity: 3
        })
    ));
    assert!(!patch_path.exists());
}

#[test]
fn test_unknown_scanner_names_address() {
    let mut image = build_image(CodecKind::HotPursuit2);
    let offset = scancfg::to_file_offset(CONFIG_TABLE + 12);
    image[offset..offset + 4].copy_from_slice(&0x2D5000u32.to_le_bytes());
    let registry = registry_for(&image, CodecKind::HotPursuit2);
    let layout = registry.resolve(&image).unwrap();

    let err = dump_scanner_configs(&image, layout, &EventNameTable::default()).unwrap_err();
    assert!(matches!(err, Error::UnknownScanner { address: 0x2D5000 }));
    assert!(err.to_string().contains("002D5000"));
}

#[test]
fn test_button_action_hashes_roundtrip() {
    let image = build_image(CodecKind::Underground);
    let registry = registry_for(&image, CodecKind::Underground);
    let layout = registry.resolve(&image).unwrap();

    let mut hashes = dump_button_action_hashes(&image, layout, 4).unwrap();
    assert_eq!(hashes, vec![0xA1, 0xA2, 0xA3, 0xA4]);
    assert!(diff_button_action_hashes(&image, layout, &hashes).unwrap().is_empty());

    hashes.swap(0, 3);
    let patch = diff_button_action_hashes(&image, layout, &hashes).unwrap();
    assert_eq!(
        patch.to_pnach(),
        "patch=0,EE,20100080,extended,A4\npatch=0,EE,2010008C,extended,A1\n"
    );
}

#[test]
fn test_builtin_registry_rejects_synthetic_image() {
    let image = build_image(CodecKind::HotPursuit2);
    let err = Registry::builtin().resolve(&image).unwrap_err();
    assert!(matches!(err, Error::UnknownBuild { checksum } if checksum == crc32(&image)));
}

#[test]
fn test_encode_decode_roundtrip_both_layouts() {
    let events = EventNameTable::new(&[scancfg::EventName {
        id: 1,
        name: "JOY_EVENT_ACCELERATE".to_string(),
    }]);
    let scanners = scanners();

    for (codec, glyph) in [
        (CodecKind::HotPursuit2, Glyph::List(vec![4, 2])),
        (CodecKind::Underground, Glyph::Single(4)),
    ] {
        let image = build_image(codec);
        let record = ScannerConfigRecord {
            configs: vec![-1, 0, 127],
            event_name: "JOY_EVENT_ACCELERATE".to_string(),
            scanner: Some("TypeChanged".to_string()),
            xor: [3, 4],
            index: [5, 6],
            shift: [7, 8],
            invert: -128,
            graph: 255,
            unk16: 0xBEEF,
            glyph,
            // display only: dropped by the encoder
            button: "START".to_string(),
        };

        let encoded = codec
            .encode(&scanners, |name| events.resolve_id(name), &record)
            .unwrap();
        assert_eq!(encoded.len(), codec.record_size());
        let decoded = codec.decode(&image, &scanners, &events, &encoded).unwrap();

        assert!(decoded.same_encoded_fields(&record), "{} round-trip", codec);
        assert_eq!(decoded.button, "");
    }
}
