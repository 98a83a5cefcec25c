//! The two BDN9 keymaps and what every keymap has to provide.

use core::fmt::Debug;

use bdn9_common::color::{HueSat, Hsv};

use crate::{encoder::EncoderMap, keymap::Keymap, Error};

pub mod fkeypad;
pub mod layer_indicator;

pub use fkeypad::FKeypad;
pub use layer_indicator::LayerIndicator;

/// The layers of one keymap, ordered from the base layer (lowest priority) up.
pub trait LayerId: Copy + Ord + Debug + 'static {
    const BASE: Self;
    const LAST: Self;

    fn index(self) -> u8;

    fn from_index(index: u8) -> Option<Self>;

    fn name(self) -> &'static str;

    /// The underglow colour shown while this is the highest active layer.
    fn color(self) -> HueSat;

    /// The layer at `index`, clamped to `BASE..=LAST`.
    fn saturating_from_index(index: u8) -> Self {
        match Self::from_index(index) {
            Some(layer) => layer,
            None if index > Self::LAST.index() => Self::LAST,
            None => Self::BASE,
        }
    }

    fn try_from_index(index: u8) -> Result<Self, Error> {
        Self::from_index(index).ok_or(Error::InvalidLayer(index))
    }
}

/// How the keymap sets up the underglow once the firmware has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Startup {
    pub hue_sat: HueSat,
    /// `None` keeps the brightness the light already has.
    pub val: Option<u8>,
    pub debug: DebugConfig,
}

impl Startup {
    pub fn hsv(&self, current_val: u8) -> Hsv {
        self.hue_sat.with_val(self.val.unwrap_or(current_val))
    }
}

/// Debug console switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugConfig {
    pub enable: bool,
    pub keyboard: bool,
    pub matrix: bool,
}

impl DebugConfig {
    pub const OFF: Self = Self {
        enable: false,
        keyboard: false,
        matrix: false,
    };
    pub const ALL: Self = Self {
        enable: true,
        keyboard: true,
        matrix: true,
    };
}

/// A complete keymap: its layers, key table, encoder table and start up settings.
pub trait Variant {
    type Layer: LayerId;

    const NAME: &'static str;
    const KEYMAP: Keymap<'static>;
    const ENCODER_MAP: EncoderMap<'static>;
    const STARTUP: Startup;
}

#[cfg(test)]
#[path = "keymaps_test.rs"]
mod test;
