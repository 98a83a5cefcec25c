pub mod key_range {
    pub const NOOP: u16 = 0x00;
    pub const TRANSPARENT: u16 = 0x01;

    pub const CONSUMER_MIN: u16 = 0x100;

    pub const FIRMWARE_MIN: u16 = 0x2000;
    pub const FIRMWARE_MAX: u16 = FIRMWARE_MIN + 0xff;

    pub const FW_RESET_TO_BOOTLOADER: u16 = FIRMWARE_MIN;

    pub const RGB_MIN: u16 = 0x2100;
    pub const RGB_MAX: u16 = RGB_MIN + 0xff;

    pub const RGB_TOGGLE: u16 = RGB_MIN;
    pub const RGB_VAL_UP: u16 = RGB_MIN + 1;
    pub const RGB_VAL_DOWN: u16 = RGB_MIN + 2;

    /// First keycode free for keymap specific actions. Nothing below this is ever handed to user
    /// code.
    pub const USER_MIN: u16 = 0x7e00;
    pub const USER_MAX: u16 = 0x7fff;
}

/// Keycodes used by the BDN9 keymaps.
///
/// Basic codes are HID keyboard usages, consumer codes are HID consumer usages offset by
/// [key_range::CONSUMER_MIN].
pub mod kc {
    use super::key_range::*;

    pub const NO: u16 = NOOP;
    pub const TRNS: u16 = TRANSPARENT;

    pub const PSCR: u16 = 0x46;
    pub const PAUS: u16 = 0x48;
    pub const INS: u16 = 0x49;
    pub const HOME: u16 = 0x4a;
    pub const PGUP: u16 = 0x4b;
    pub const DEL: u16 = 0x4c;
    pub const END: u16 = 0x4d;
    pub const PGDN: u16 = 0x4e;
    pub const RIGHT: u16 = 0x4f;
    pub const LEFT: u16 = 0x50;
    pub const DOWN: u16 = 0x51;
    pub const UP: u16 = 0x52;
    pub const PENT: u16 = 0x58;
    pub const APP: u16 = 0x65;
    pub const F13: u16 = 0x68;
    pub const F14: u16 = 0x69;
    pub const F15: u16 = 0x6a;
    pub const F16: u16 = 0x6b;
    pub const F17: u16 = 0x6c;
    pub const F18: u16 = 0x6d;
    pub const F19: u16 = 0x6e;
    pub const F20: u16 = 0x6f;
    pub const F21: u16 = 0x70;
    pub const F22: u16 = 0x71;
    pub const F23: u16 = 0x72;
    pub const F24: u16 = 0x73;
    pub const STOP: u16 = 0x78;

    pub const MFFD: u16 = CONSUMER_MIN + 0x0b3;
    pub const MRWD: u16 = CONSUMER_MIN + 0x0b4;
    pub const MNXT: u16 = CONSUMER_MIN + 0x0b5;
    pub const MPRV: u16 = CONSUMER_MIN + 0x0b6;
    pub const MSTP: u16 = CONSUMER_MIN + 0x0b7;
    pub const MPLY: u16 = CONSUMER_MIN + 0x0cd;
    pub const MUTE: u16 = CONSUMER_MIN + 0x0e2;
    pub const VOLU: u16 = CONSUMER_MIN + 0x0e9;
    pub const VOLD: u16 = CONSUMER_MIN + 0x0ea;
    pub const MSEL: u16 = CONSUMER_MIN + 0x183;

    pub const BOOT: u16 = FW_RESET_TO_BOOTLOADER;

    pub const RGB_TOG: u16 = RGB_TOGGLE;
    pub const RGB_VAI: u16 = RGB_VAL_UP;
    pub const RGB_VAD: u16 = RGB_VAL_DOWN;

    pub const CLR_LAYERS: u16 = USER_MIN;
    pub const PREV_LAYER: u16 = USER_MIN + 1;
    pub const NEXT_LAYER: u16 = USER_MIN + 2;
}

const KEY_NAMES: &[(&str, u16)] = &[
    ("noop", kc::NO),
    ("transparent", kc::TRNS),
    ("printscreen", kc::PSCR),
    ("pause", kc::PAUS),
    ("insert", kc::INS),
    ("home", kc::HOME),
    ("pageup", kc::PGUP),
    ("delete", kc::DEL),
    ("end", kc::END),
    ("pagedown", kc::PGDN),
    ("right", kc::RIGHT),
    ("left", kc::LEFT),
    ("down", kc::DOWN),
    ("up", kc::UP),
    ("kpenter", kc::PENT),
    ("application", kc::APP),
    ("f13", kc::F13),
    ("f14", kc::F14),
    ("f15", kc::F15),
    ("f16", kc::F16),
    ("f17", kc::F17),
    ("f18", kc::F18),
    ("f19", kc::F19),
    ("f20", kc::F20),
    ("f21", kc::F21),
    ("f22", kc::F22),
    ("f23", kc::F23),
    ("f24", kc::F24),
    ("stop", kc::STOP),
    ("fastforward", kc::MFFD),
    ("rewind", kc::MRWD),
    ("nexttrack", kc::MNXT),
    ("prevtrack", kc::MPRV),
    ("tcstop", kc::MSTP),
    ("playpause", kc::MPLY),
    ("audiomute", kc::MUTE),
    ("audiovolup", kc::VOLU),
    ("audiovoldown", kc::VOLD),
    ("ccconfig", kc::MSEL),
    ("resettobootloader", kc::BOOT),
    ("rgbtoggle", kc::RGB_TOG),
    ("rgbvalup", kc::RGB_VAI),
    ("rgbvaldown", kc::RGB_VAD),
    ("clearlayers", kc::CLR_LAYERS),
    ("prevlayer", kc::PREV_LAYER),
    ("nextlayer", kc::NEXT_LAYER),
];

/// Find the keycode for a mnemonic. Case, `_` and `-` are ignored so `Audio_Vol_Up`,
/// `audio-vol-up` and `audiovolup` are the same key.
///
/// ```
/// use bdn9_common::keycodes::{key_code, kc};
///
/// assert_eq!(key_code("Next_Layer"), Some(kc::NEXT_LAYER));
/// assert_eq!(key_code("nope"), None);
/// ```
pub fn key_code(name: &str) -> Option<u16> {
    KEY_NAMES
        .iter()
        .find(|(n, _)| same_name(n, name))
        .map(|(_, code)| *code)
}

/// The canonical mnemonic of `code`, if it is one the keymaps use.
pub fn key_name(code: u16) -> Option<&'static str> {
    KEY_NAMES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}

fn same_name(canonical: &str, name: &str) -> bool {
    let mut name = name
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase());
    let mut canonical = canonical.chars();
    loop {
        match (canonical.next(), name.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a == b => {}
            _ => return false,
        }
    }
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
