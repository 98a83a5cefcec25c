use crate::{encoder::Encoder, layer_state::LayerState};

use super::*;

#[test]
fn base_keys() {
    let km = FKeypad::KEYMAP;

    assert_eq!(km.get(0, 0, 0), Ok(MUTE));
    assert_eq!(km.get(0, 0, 1), Ok(CLR_LAYERS));
    assert_eq!(km.get(0, 0, 2), Ok(MPLY));
    assert_eq!(km.get(0, 1, 0), Ok(F19));
    assert_eq!(km.get(0, 2, 2), Ok(F24));
}

#[test]
fn second_keys_fall_through_to_clear_layers() {
    let km = FKeypad::KEYMAP;
    let active = LayerState::only(0).with(Layer::Second.index());

    assert_eq!(km.find_code(active, 0, 0), Ok(BOOT));
    assert_eq!(km.find_code(active, 0, 1), Ok(CLR_LAYERS));
    assert_eq!(km.find_code(active, 0, 2), Ok(STOP));
    assert_eq!(km.find_code(active, 1, 0), Ok(F13));
    assert_eq!(km.find_code(active, 2, 2), Ok(F18));
}

#[test]
fn encoders() {
    let em = FKeypad::ENCODER_MAP;

    assert_eq!(
        em.get(0, Encoder::Left),
        Ok(EncoderAction::ccw_cw(VOLD, VOLU))
    );
    assert_eq!(
        em.get(0, Encoder::Middle),
        Ok(EncoderAction::ccw_cw(PREV_LAYER, NEXT_LAYER))
    );
    assert_eq!(
        em.get(0, Encoder::Right),
        Ok(EncoderAction::ccw_cw(MPRV, MNXT))
    );
    assert_eq!(em.get(1, Encoder::Left), Ok(EncoderAction::ccw_cw(NO, NO)));
    assert_eq!(em.get(1, Encoder::Middle), Ok(EncoderAction::transparent()));
    assert_eq!(
        em.get(1, Encoder::Right),
        Ok(EncoderAction::ccw_cw(RGB_VAD, RGB_VAI))
    );
}
