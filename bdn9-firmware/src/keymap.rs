use bdn9_common::keycodes::key_range::TRANSPARENT;

use crate::{layer_state::LayerState, Error, COLS, ROWS};

/// Key codes of one layer, row-major with the top row first.
pub type LayerKeys = [[u16; COLS]; ROWS];

#[derive(Debug)]
pub struct Layer<'l>(&'l LayerKeys);

impl Layer<'_> {
    pub fn get(&self, row: usize, column: usize) -> Option<u16> {
        self.0.get(row)?.get(column).copied()
    }
}

/// Per-layer key table, indexed by layer number.
#[derive(Debug, Clone, Copy)]
pub struct Keymap<'a>(&'a [LayerKeys]);

impl<'a> Keymap<'a> {
    pub const fn new(layers: &'a [LayerKeys]) -> Self {
        Self(layers)
    }

    pub fn layer_count(&self) -> usize {
        self.0.len()
    }

    pub fn get_layer(&self, layer_num: u8) -> Option<Layer<'a>> {
        self.0.get(layer_num as usize).map(Layer)
    }

    /// The code at `row`, `column` of one layer, without looking through transparent keys.
    pub fn get(&self, layer_num: u8, row: usize, column: usize) -> Result<u16, Error> {
        self.get_layer(layer_num)
            .ok_or(Error::InvalidLayer(layer_num))?
            .get(row, column)
            .ok_or(Error::InvalidPosition { row, column })
    }

    /// The code a key sends with `active` layers on: the first code that is not
    /// [TRANSPARENT], looking from the highest active layer down. Falls back to `NOOP` when
    /// every active layer is transparent there.
    pub fn find_code(&self, active: LayerState, row: usize, column: usize) -> Result<u16, Error> {
        if row >= ROWS || column >= COLS {
            return Err(Error::InvalidPosition { row, column });
        }
        for layer_num in active.iter().rev() {
            if let Some(code) = self.get_layer(layer_num).and_then(|l| l.get(row, column)) {
                if code != TRANSPARENT {
                    return Ok(code);
                }
            }
        }
        Ok(0)
    }
}

#[cfg(test)]
#[path = "keymap_test.rs"]
mod test;
