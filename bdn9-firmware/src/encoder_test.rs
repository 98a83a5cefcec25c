use bdn9_common::keycodes::kc;

use super::*;

const ENCODERS: [LayerEncoders; 2] = [
    [
        EncoderAction::ccw_cw(kc::VOLD, kc::VOLU),
        EncoderAction::ccw_cw(kc::MPRV, kc::MNXT),
        EncoderAction::ccw_cw(kc::PREV_LAYER, kc::NEXT_LAYER),
    ],
    [
        EncoderAction::ccw_cw(kc::NO, kc::NO),
        EncoderAction::ccw_cw(kc::RGB_VAD, kc::TRNS),
        EncoderAction::transparent(),
    ],
];

const MAP: EncoderMap<'static> = EncoderMap::new(&ENCODERS);

#[test]
fn encoder_from_index() {
    assert_eq!(Encoder::try_from(0), Ok(Encoder::Left));
    assert_eq!(Encoder::try_from(1), Ok(Encoder::Right));
    assert_eq!(Encoder::try_from(2), Ok(Encoder::Middle));
    assert_eq!(Encoder::try_from(3), Err(Error::InvalidEncoder(3)));
    assert_eq!(Encoder::Middle.index(), 2);
}

#[test]
fn get() {
    assert_eq!(MAP.layer_count(), 2);
    assert_eq!(
        MAP.get(0, Encoder::Middle),
        Ok(EncoderAction::ccw_cw(kc::PREV_LAYER, kc::NEXT_LAYER))
    );
    assert_eq!(MAP.get(1, Encoder::Middle), Ok(EncoderAction::transparent()));
    assert_eq!(MAP.get(2, Encoder::Left), Err(Error::InvalidLayer(2)));
}

#[test]
fn find_code() {
    let base = LayerState::only(0);
    let second = base.with(1);

    assert_eq!(
        MAP.find_code(base, Encoder::Left, Direction::Clockwise),
        kc::VOLU
    );
    assert_eq!(
        MAP.find_code(second, Encoder::Left, Direction::Clockwise),
        kc::NO
    );
    assert_eq!(
        MAP.find_code(second, Encoder::Middle, Direction::CounterClockwise),
        kc::PREV_LAYER
    );
    assert_eq!(
        MAP.find_code(second, Encoder::Right, Direction::CounterClockwise),
        kc::RGB_VAD
    );
    assert_eq!(
        MAP.find_code(second, Encoder::Right, Direction::Clockwise),
        kc::MNXT
    );
}

#[test]
fn find_code_nothing_mapped() {
    assert_eq!(
        MAP.find_code(LayerState::only(1), Encoder::Middle, Direction::Clockwise),
        kc::NO
    );
    assert_eq!(
        MAP.find_code(LayerState::EMPTY, Encoder::Left, Direction::Clockwise),
        kc::NO
    );
}
