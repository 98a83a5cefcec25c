//! Function-key pad: F13-F24 over two layers with media keys on top.

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
    Second = 1,
}

impl LayerId for Layer {
    const BASE: Self = Self::Base;
    const LAST: Self = Self::Second;

    fn index(self) -> u8 {
        self as u8
    }

    fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Base),
            1 => Some(Self::Second),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Base => "BASE",
            Self::Second => "SECOND",
        }
    }

    fn color(self) -> HueSat {
        match self {
            Self::Base => HueSat::UNSATURATED,
            Self::Second => HueSat::full(hue::BLUE),
        }
    }
}

#[rustfmt::skip]
const KEYS: [LayerKeys; 2] = [
    // Base
    [
        [MUTE, CLR_LAYERS, MPLY],
        [F19,  F20,        F21],
        [F22,  F23,        F24],
    ],
    // Second
    [
        [BOOT, TRNS, STOP],
        [F13,  F14,  F15],
        [F16,  F17,  F18],
    ],
];

#[rustfmt::skip]
const ENCODERS: [LayerEncoders; 2] = [
    // Base: left, right, middle
    [
        EncoderAction::ccw_cw(VOLD, VOLU),
        EncoderAction::ccw_cw(MPRV, MNXT),
        EncoderAction::ccw_cw(PREV_LAYER, NEXT_LAYER),
    ],
    // Second
    [
        EncoderAction::ccw_cw(NO, NO),
        EncoderAction::ccw_cw(RGB_VAD, RGB_VAI),
        EncoderAction::transparent(),
    ],
];

pub struct FKeypad;

impl Variant for FKeypad {
    type Layer = Layer;

    const NAME: &'static str = "fkeypad";
    const KEYMAP: Keymap<'static> = Keymap::new(&KEYS);
    const ENCODER_MAP: EncoderMap<'static> = EncoderMap::new(&ENCODERS);
    const STARTUP: Startup = Startup {
        hue_sat: HueSat::UNSATURATED,
        val: Some(u8::MAX),
        debug: DebugConfig::OFF,
    };
}

#[cfg(test)]
#[path = "fkeypad_test.rs"]
mod test;
