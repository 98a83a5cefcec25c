//! Media, arrow, paging and function keys on four layers, each with its own underglow colour.
//!
//! The top middle key and the middle encoder are transparent above the base layer so that the
//! navigation keys can always be reached.

use bdn9_common::{
    color::{hue, HueSat},
    keycodes::kc::*,
};

use super::{DebugConfig, LayerId, Startup, Variant};
use crate::{
    encoder::{EncoderAction, EncoderMap, LayerEncoders},
    keymap::{Keymap, LayerKeys},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Base = 0,
    Arrow = 1,
    PgUpDn = 2,
    FKey = 3,
}

impl LayerId for Layer {
    const BASE: Self = Self::Base;
    const LAST: Self = Self::FKey;

    fn index(self) -> u8 {
        self as u8
    }

    fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Base),
            1 => Some(Self::Arrow),
            2 => Some(Self::PgUpDn),
            3 => Some(Self::FKey),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Base => "BASE",
            Self::Arrow => "ARROW",
            Self::PgUpDn => "PGUPDN",
            Self::FKey => "FKEY",
        }
    }

    fn color(self) -> HueSat {
        match self {
            Self::Base => HueSat::UNSATURATED,
            Self::Arrow => HueSat::full(hue::BLUE),
            Self::PgUpDn => HueSat::full(hue::VIOLET),
            Self::FKey => HueSat::full(hue::GREEN),
        }
    }
}

const TRNS_ENCODERS: LayerEncoders = [EncoderAction::transparent(); 3];

#[rustfmt::skip]
const KEYS: [LayerKeys; 4] = [
    // Base
    [
        [MUTE, CLR_LAYERS, MSEL],
        [MPRV, MPLY,       MNXT],
        [MRWD, MSTP,       MFFD],
    ],
    // Arrow
    [
        [BOOT, TRNS, STOP],
        [DEL,  UP,   PENT],
        [LEFT, DOWN, RIGHT],
    ],
    // PgUpDn
    [
        [PSCR, TRNS, PAUS],
        [INS,  HOME, PGUP],
        [DEL,  END,  PGDN],
    ],
    // FKey
    [
        [NO,  TRNS, NO],
        [F14, F15,  F16],
        [F17, F18,  APP],
    ],
];

#[rustfmt::skip]
const ENCODERS: [LayerEncoders; 4] = [
    // Base: left, right, middle
    [
        EncoderAction::ccw_cw(VOLD, VOLU),
        EncoderAction::ccw_cw(RGB_VAD, RGB_VAI),
        EncoderAction::ccw_cw(PREV_LAYER, NEXT_LAYER),
    ],
    TRNS_ENCODERS,
    TRNS_ENCODERS,
    TRNS_ENCODERS,
];

pub struct LayerIndicator;

impl Variant for LayerIndicator {
    type Layer = Layer;

    const NAME: &'static str = "layer-indicator";
    const KEYMAP: Keymap<'static> = Keymap::new(&KEYS);
    const ENCODER_MAP: EncoderMap<'static> = EncoderMap::new(&ENCODERS);
    const STARTUP: Startup = Startup {
        hue_sat: HueSat::UNSATURATED,
        val: None,
        debug: DebugConfig::ALL,
    };
}

#[cfg(test)]
#[path = "layer_indicator_test.rs"]
mod test;
