//! Encoder action tables.
//!
//! Each encoder turn step is treated by the dispatcher as a tap of the code mapped to its
//! direction on the highest active layer that is not transparent.

use bdn9_common::keycodes::key_range::TRANSPARENT;

use crate::{layer_state::LayerState, Error, NUM_ENCODERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Encoder {
    Left = 0,
    Right = 1,
    Middle = 2,
}

impl Encoder {
    pub const ALL: [Self; NUM_ENCODERS] = [Self::Left, Self::Right, Self::Middle];

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Encoder {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(Error::InvalidEncoder(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    CounterClockwise,
    Clockwise,
}

/// The codes an encoder sends when turned counter-clockwise and clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    pub ccw: u16,
    pub cw: u16,
}

impl EncoderAction {
    pub const fn ccw_cw(ccw: u16, cw: u16) -> Self {
        Self { ccw, cw }
    }

    pub const fn transparent() -> Self {
        Self::ccw_cw(TRANSPARENT, TRANSPARENT)
    }

    pub const fn code(&self, direction: Direction) -> u16 {
        match direction {
            Direction::CounterClockwise => self.ccw,
            Direction::Clockwise => self.cw,
        }
    }
}

/// Encoder actions of one layer, indexed by [Encoder::index].
pub type LayerEncoders = [EncoderAction; NUM_ENCODERS];

/// Per-layer encoder table, indexed by layer number.
#[derive(Debug, Clone, Copy)]
pub struct EncoderMap<'a>(&'a [LayerEncoders]);

impl<'a> EncoderMap<'a> {
    pub const fn new(layers: &'a [LayerEncoders]) -> Self {
        Self(layers)
    }

    pub fn layer_count(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, layer_num: u8, encoder: Encoder) -> Result<EncoderAction, Error> {
        self.0
            .get(layer_num as usize)
            .map(|l| l[encoder.index()])
            .ok_or(Error::InvalidLayer(layer_num))
    }

    /// The code `encoder` sends turning in `direction` with `active` layers on. Transparent
    /// entries fall through to lower layers; `NOOP` when nothing below maps it.
    pub fn find_code(&self, active: LayerState, encoder: Encoder, direction: Direction) -> u16 {
        active
            .iter()
            .rev()
            .filter_map(|layer_num| self.get(layer_num, encoder).ok())
            .map(|action| action.code(direction))
            .find(|code| *code != TRANSPARENT)
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "encoder_test.rs"]
mod test;
