//! Built-in table of known game builds, keyed by image CRC-32.

use crate::codec::CodecKind;

use super::{ImageLayout, ScannerMap};

pub(super) struct BuiltinBuild {
    pub checksums: &'static [u32],
    pub title: &'static str,
    pub codec: CodecKind,
    pub event_names: u32,
    pub num_event_names: u32,
    pub scanner_configs: u32,
    pub num_scanner_configs: u32,
    pub scanners: &'static [(u32, &'static str)],
    pub button_action_hashes: Option<u32>,
}

impl BuiltinBuild {
    pub fn to_layout(&self) -> ImageLayout {
        ImageLayout {
            title: self.title.to_string(),
            codec: self.codec,
            event_names: self.event_names,
            num_event_names: self.num_event_names,
            scanner_configs: self.scanner_configs,
            num_scanner_configs: self.num_scanner_configs,
            scanners: self.scanners.iter().copied().collect::<ScannerMap>(),
            button_action_hashes: self.button_action_hashes,
        }
    }
}

pub(super) static BUILTIN_BUILDS: &[BuiltinBuild] = &[
    BuiltinBuild {
        checksums: &[0xB879BB85],
        title: "Need for Speed: Hot Pursuit 2 (NTSC-U)",
        codec: CodecKind::HotPursuit2,
        event_names: 0x2FA2D0,
        num_event_names: 130,
        scanner_configs: 0x2DC500,
        num_scanner_configs: 0x32FBE0,
        scanners: &[
            (0x1545E8, "TypeChanged"),
            (0x1546B0, "DigitalDown"),
            (0x154A90, "DigitalRepeat"),
            (0x1547E8, "DigitalUpOrDown"),
            (0x154C90, "DigitalAnalog"),
            (0x154628, "DigitalAnyButton"),
            (0x154E48, "Analog"),
            (0x154918, "DigitalDoublePress"),
            (0x154BE8, "DigitalSteer"),
        ],
        button_action_hashes: None,
    },
    BuiltinBuild {
        checksums: &[0x6297BB64],
        title: "Need for Speed: Hot Pursuit 2 (NTSC-U A1.56 prototype)",
        codec: CodecKind::HotPursuit2,
        event_names: 0x2F1B48,
        num_event_names: 130,
        scanner_configs: 0x2D3AC0,
        num_scanner_configs: 0x326C40,
        scanners: &[
            (0x1541A0, "TypeChanged"),
            (0x1541E0, "DigitalAnyButton"),
            (0x154268, "DigitalDown"),
            (0x154380, "DigitalDownPlus"),
            (0x1543A0, "DigitalUpOrDown"),
            (0x1544B0, "DigitalUpOrDownPlus"),
            (0x1544D0, "DigitalDoublePress"),
            (0x154648, "DigitalRepeat"),
            (0x1547A0, "DigitalSteer"),
            (0x154848, "DigitalAnalog"),
            (0x154A00, "Analog"),
        ],
        button_action_hashes: None,
    },
    BuiltinBuild {
        // NTSC-U and PAL share one memory layout
        checksums: &[0xB0FCC39B, 0xC1FAA5D5],
        title: "Need for Speed: Underground (NTSC-U/PAL)",
        codec: CodecKind::Underground,
        event_names: 0x4E1FF0,
        num_event_names: 169,
        scanner_configs: 0x44C400,
        num_scanner_configs: 0x500128,
        scanners: &[
            (0x2D4FD0, "TypeChanged"),
            (0x2D5010, "DigitalAnyButton"),
            (0x2D5098, "DigitalDown"),
            (0x2D51B0, "DigitalDownPlus"),
            (0x2D51D0, "DigitalUpOrDown"),
            (0x2D52E0, "DigitalUpOrDownPlus"),
            (0x2D5300, "DigitalDoublePress"),
            (0x2D5478, "DigitalRepeat"),
            (0x2D55D0, "DigitalSteer"),
            (0x2D5678, "DigitalAnalog"),
            (0x2D58C8, "DigitalAnalogDown"),
            (0x2D5A40, "DigitalAnalogUpOrDown"),
            (0x2D5B68, "Analog"),
        ],
        button_action_hashes: Some(0x4CB988),
    },
    BuiltinBuild {
        checksums: &[0x763E9FDD],
        title: "Need for Speed: Underground (NTSC-J, EA Best Hits)",
        codec: CodecKind::Underground,
        event_names: 0x4E68F0,
        num_event_names: 169,
        scanner_configs: 0x44D400,
        num_scanner_configs: 0x504A28,
        scanners: &[
            (0x2D56B0, "TypeChanged"),
            (0x2D56F0, "DigitalAnyButton"),
            (0x2D5778, "DigitalDown"),
            (0x2D5890, "DigitalDownPlus"),
            (0x2D58B0, "DigitalUpOrDown"),
            (0x2D59C0, "DigitalUpOrDownPlus"),
            (0x2D59E0, "DigitalDoublePress"),
            (0x2D5B58, "DigitalRepeat"),
            (0x2D5CB0, "DigitalSteer"),
            (0x2D5D58, "DigitalAnalog"),
            (0x2D5FA8, "DigitalAnalogDown"),
            (0x2D6120, "DigitalAnalogUpOrDown"),
            (0x2D6248, "Analog"),
        ],
        button_action_hashes: Some(0x4CC988),
    },
    BuiltinBuild {
        checksums: &[0xAD838821],
        title: "Need for Speed: Underground (NTSC-J, EA Best Hits, rev. 2)",
        codec: CodecKind::Underground,
        event_names: 0x4EE500,
        num_event_names: 169,
        scanner_configs: 0x453100,
        num_scanner_configs: 0x50D0A8,
        scanners: &[
            (0x2DB618, "TypeChanged"),
            (0x2DB658, "DigitalAnyButton"),
            (0x2DB6E0, "DigitalDown"),
            (0x2DB7F8, "DigitalDownPlus"),
            (0x2DB818, "DigitalUpOrDown"),
            (0x2DB928, "DigitalUpOrDownPlus"),
            (0x2DB948, "DigitalDoublePress"),
            (0x2DBAC0, "DigitalRepeat"),
            (0x2DBC18, "DigitalSteer"),
            (0x2DBCC0, "DigitalAnalog"),
            (0x2DBF10, "DigitalAnalogDown"),
            (0x2DC088, "DigitalAnalogUpOrDown"),
            (0x2DC1B0, "Analog"),
        ],
        button_action_hashes: Some(0x4D7CF0),
    },
    BuiltinBuild {
        checksums: &[0xE6725A8C],
        title: "Need for Speed: Underground (NTSC-K)",
        codec: CodecKind::Underground,
        event_names: 0x4ED320,
        num_event_names: 169,
        scanner_configs: 0x451F00,
        num_scanner_configs: 0x50BDA8,
        scanners: &[
            (0x2DA018, "TypeChanged"),
            (0x2DA058, "DigitalAnyButton"),
            (0x2DA0E0, "DigitalDown"),
            (0x2DA1F8, "DigitalDownPlus"),
            (0x2DA218, "DigitalUpOrDown"),
            (0x2DA328, "DigitalUpOrDownPlus"),
            (0x2DA348, "DigitalDoublePress"),
            (0x2DA4C0, "DigitalRepeat"),
            (0x2DA618, "DigitalSteer"),
            (0x2DA6C0, "DigitalAnalog"),
            (0x2DA910, "DigitalAnalogDown"),
            (0x2DAA88, "DigitalAnalogUpOrDown"),
            (0x2DABB0, "Analog"),
        ],
        button_action_hashes: Some(0x4D6B08),
    },
];
