#![no_std]
pub mod encoder;
pub mod firmware_functions;
pub mod keymap;
pub mod keymaps;
pub mod keypad;
pub mod layer_state;
pub mod navigator;
pub mod rgb;

#[macro_use]
mod macros;

pub use bdn9_common::{color, keycodes};

/// Number of key rows on the pad.
pub const ROWS: usize = 3;
/// Number of key columns on the pad.
pub const COLS: usize = 3;
/// Number of rotary encoders on the pad.
pub const NUM_ENCODERS: usize = 3;

/// Raised when a raw index from outside the tables does not name a layer, key or encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    InvalidLayer(u8),
    InvalidPosition { row: usize, column: usize },
    InvalidEncoder(u8),
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
