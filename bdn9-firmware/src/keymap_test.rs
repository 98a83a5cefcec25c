use bdn9_common::keycodes::kc;

use super::*;

const KEYS: [LayerKeys; 3] = [
    [
        [kc::MUTE, kc::CLR_LAYERS, kc::MPLY],
        [kc::F19, kc::F20, kc::F21],
        [kc::F22, kc::F23, kc::F24],
    ],
    [
        [kc::BOOT, kc::TRNS, kc::STOP],
        [kc::F13, kc::TRNS, kc::NO],
        [kc::F16, kc::F17, kc::F18],
    ],
    [
        [kc::TRNS, kc::TRNS, kc::TRNS],
        [kc::TRNS, kc::TRNS, kc::TRNS],
        [kc::UP, kc::TRNS, kc::TRNS],
    ],
];

const KEYMAP: Keymap<'static> = Keymap::new(&KEYS);

#[test]
fn get() {
    assert_eq!(KEYMAP.layer_count(), 3);
    assert_eq!(KEYMAP.get(0, 0, 1), Ok(kc::CLR_LAYERS));
    assert_eq!(KEYMAP.get(1, 0, 1), Ok(kc::TRNS));
    assert_eq!(KEYMAP.get(1, 2, 2), Ok(kc::F18));
    assert_eq!(KEYMAP.get(3, 0, 0), Err(Error::InvalidLayer(3)));
    assert_eq!(
        KEYMAP.get(0, 3, 0),
        Err(Error::InvalidPosition { row: 3, column: 0 })
    );
    assert_eq!(
        KEYMAP.get(0, 0, 3),
        Err(Error::InvalidPosition { row: 0, column: 3 })
    );
}

#[test]
fn find_code_transparent() {
    let active = LayerState::only(0).with(1);

    assert_eq!(KEYMAP.find_code(active, 0, 0), Ok(kc::BOOT));
    assert_eq!(KEYMAP.find_code(active, 0, 1), Ok(kc::CLR_LAYERS));
    assert_eq!(KEYMAP.find_code(active, 1, 1), Ok(kc::F20));

    let base = LayerState::only(0);
    assert_eq!(KEYMAP.find_code(base, 0, 0), Ok(kc::MUTE));
}

#[test]
fn find_code_noop_is_opaque() {
    let active = LayerState::only(0).with(1);

    assert_eq!(KEYMAP.find_code(active, 1, 2), Ok(kc::NO));
}

#[test]
fn find_code_skips_inactive_layers() {
    let active = LayerState::only(0).with(2);

    assert_eq!(KEYMAP.find_code(active, 2, 0), Ok(kc::UP));
    assert_eq!(KEYMAP.find_code(active, 0, 0), Ok(kc::MUTE));
    assert_eq!(KEYMAP.find_code(active, 1, 2), Ok(kc::F21));
}

#[test]
fn find_code_all_transparent() {
    assert_eq!(KEYMAP.find_code(LayerState::only(2), 0, 0), Ok(kc::NO));
    assert_eq!(KEYMAP.find_code(LayerState::only(9), 0, 0), Ok(kc::NO));
    assert_eq!(
        KEYMAP.find_code(LayerState::only(0), 0, 9),
        Err(Error::InvalidPosition { row: 0, column: 9 })
    );
}
