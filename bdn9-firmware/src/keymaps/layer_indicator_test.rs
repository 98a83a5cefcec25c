use crate::{
    encoder::{Direction, Encoder},
    layer_state::LayerState,
};

use super::*;

const LAYERS: [Layer; 4] = [Layer::Base, Layer::Arrow, Layer::PgUpDn, Layer::FKey];

#[test]
fn key_rows() {
    let km = LayerIndicator::KEYMAP;
    let row = |layer: Layer, row: usize| {
        [0, 1, 2].map(|col| km.get(layer.index(), row, col).unwrap())
    };

    assert_eq!(row(Layer::Base, 0), [MUTE, CLR_LAYERS, MSEL]);
    assert_eq!(row(Layer::Base, 1), [MPRV, MPLY, MNXT]);
    assert_eq!(row(Layer::Base, 2), [MRWD, MSTP, MFFD]);
    assert_eq!(row(Layer::Arrow, 1), [DEL, UP, PENT]);
    assert_eq!(row(Layer::Arrow, 2), [LEFT, DOWN, RIGHT]);
    assert_eq!(row(Layer::PgUpDn, 0), [PSCR, TRNS, PAUS]);
    assert_eq!(row(Layer::PgUpDn, 2), [DEL, END, PGDN]);
    assert_eq!(row(Layer::FKey, 0), [NO, TRNS, NO]);
    assert_eq!(row(Layer::FKey, 2), [F17, F18, APP]);
}

#[test]
fn clear_layers_reachable_on_every_layer() {
    for layer in LAYERS {
        let active = LayerState::only(0).with(layer.index());
        assert_eq!(
            LayerIndicator::KEYMAP.find_code(active, 0, 1),
            Ok(CLR_LAYERS),
            "{layer:?}"
        );
    }
}

#[test]
fn navigation_encoder_reachable_on_every_layer() {
    let em = LayerIndicator::ENCODER_MAP;
    for layer in LAYERS {
        let active = LayerState::only(0).with(layer.index());
        assert_eq!(
            em.find_code(active, Encoder::Middle, Direction::CounterClockwise),
            PREV_LAYER
        );
        assert_eq!(
            em.find_code(active, Encoder::Middle, Direction::Clockwise),
            NEXT_LAYER
        );
        assert_eq!(
            em.find_code(active, Encoder::Left, Direction::Clockwise),
            VOLU
        );
        assert_eq!(
            em.find_code(active, Encoder::Right, Direction::CounterClockwise),
            RGB_VAD
        );
    }
}

#[test]
fn colors() {
    assert_eq!(Layer::Base.color(), HueSat::new(0, 0));
    assert_eq!(Layer::Arrow.color(), HueSat::new(170, 255));
    assert_eq!(Layer::PgUpDn.color(), HueSat::new(201, 255));
    assert_eq!(Layer::FKey.color(), HueSat::new(85, 255));
}
