//! Layer navigation keys and the layer indicator colour.

use bdn9_common::{color::HueSat, keycodes::kc};

use crate::{
    keymaps::LayerId,
    layer_state::{LayerStack, LayerState},
    rgb::RgbLight,
};

/// Whether the firmware should go on to its default handling of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum Dispatch {
    Consumed,
    Continue,
}

/// The keymap's own keycodes. They have no HID meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomAction {
    /// Back to the base layer.
    ClearLayers,
    PrevLayer,
    NextLayer,
}

impl CustomAction {
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            kc::CLR_LAYERS => Some(Self::ClearLayers),
            kc::PREV_LAYER => Some(Self::PrevLayer),
            kc::NEXT_LAYER => Some(Self::NextLayer),
            _ => None,
        }
    }

    pub const fn code(self) -> u16 {
        match self {
            Self::ClearLayers => kc::CLR_LAYERS,
            Self::PrevLayer => kc::PREV_LAYER,
            Self::NextLayer => kc::NEXT_LAYER,
        }
    }
}

/// Run the navigation keys. Only key down acts; the layer stack ends up with exactly one run time
/// layer, or none for [CustomAction::ClearLayers]. Moves stop at `L::BASE` and `L::LAST`.
pub fn handle_key_event<L: LayerId>(
    keycode: u16,
    pressed: bool,
    layers: &mut LayerStack,
) -> Dispatch {
    if !pressed {
        return Dispatch::Continue;
    }
    let Some(action) = CustomAction::from_code(keycode) else {
        return Dispatch::Continue;
    };

    let current = layers.highest();
    match action {
        CustomAction::ClearLayers => {
            crate::debug!("Resetting to base layer.");
            layers.clear();
        }
        CustomAction::PrevLayer => {
            crate::debug!("Moving down a layer.");
            let layer = L::saturating_from_index(current.saturating_sub(1)).max(L::BASE);
            layers.move_to(layer.index());
        }
        CustomAction::NextLayer => {
            crate::debug!("Moving up a layer.");
            let layer = L::saturating_from_index(current.saturating_add(1)).min(L::LAST);
            layers.move_to(layer.index());
        }
    }
    Dispatch::Consumed
}

/// The indicator colour for `state`: the colour of its highest layer. Indexes beyond the keymap's
/// layers show the base colour.
pub fn layer_color<L: LayerId>(state: LayerState) -> HueSat {
    L::from_index(state.highest()).map_or(L::BASE.color(), L::color)
}

/// Layer change callback. Shows the colour of the highest active layer at the current brightness
/// and hands `state` back untouched.
pub fn on_layer_stack_changed<L: LayerId>(state: LayerState, rgb: &mut RgbLight) -> LayerState {
    crate::debug!("At layer {}.", state.highest());
    rgb.set_hs(layer_color::<L>(state));
    state
}

#[cfg(test)]
#[path = "navigator_test.rs"]
mod test;
