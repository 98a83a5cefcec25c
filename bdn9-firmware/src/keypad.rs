//! Event dispatch for one keymap, standing in for the firmware's own key processing: table
//! lookup, the navigation keys, the default handlers and layer change notification.

use core::marker::PhantomData;

use bdn9_common::keycodes::{key_name, key_range};

use crate::{
    encoder::{Direction, Encoder},
    firmware_functions,
    keymaps::{DebugConfig, LayerId, Variant},
    layer_state::LayerStack,
    navigator::{self, Dispatch},
    rgb::{self, Mode, RgbLight},
    Error,
};

pub struct Keypad<V: Variant> {
    layers: LayerStack,
    rgb: RgbLight,
    debug: DebugConfig,
    _variant: PhantomData<V>,
}

impl<V: Variant> Default for Keypad<V> {
    fn default() -> Self {
        Self::new(RgbLight::default())
    }
}

impl<V: Variant> Keypad<V> {
    /// Start the keymap on `rgb`, the light as the firmware left it.
    pub fn new(rgb: RgbLight) -> Self {
        let mut keypad = Self {
            layers: LayerStack::default(),
            rgb,
            debug: DebugConfig::OFF,
            _variant: PhantomData,
        };
        keypad.post_init();
        keypad
    }

    fn post_init(&mut self) {
        let startup = V::STARTUP;
        self.debug = startup.debug;

        self.rgb.enable();
        self.rgb.set_hsv(startup.hsv(self.rgb.val()));
        self.rgb.set_mode(Mode::StaticLight);
        crate::info!("{} ready", V::NAME);
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    pub fn rgb(&self) -> &RgbLight {
        &self.rgb
    }

    pub fn debug_config(&self) -> DebugConfig {
        self.debug
    }

    /// The highest active layer.
    pub fn current_layer(&self) -> V::Layer {
        V::Layer::saturating_from_index(self.layers.highest())
    }

    /// Make `layer` the only active layer above the default.
    pub fn set_layer(&mut self, layer: V::Layer) {
        self.layers.move_to(layer.index());
        self.notify_layer_change();
    }

    /// Run `keycode` through the navigation keys and then the default handlers.
    pub fn process_key(&mut self, keycode: u16, pressed: bool) -> Dispatch {
        if self.debug.enable && self.debug.keyboard {
            crate::debug!(
                "key {} {}",
                key_name(keycode).unwrap_or("?"),
                if pressed { "down" } else { "up" }
            );
        }

        let mut dispatch =
            navigator::handle_key_event::<V::Layer>(keycode, pressed, &mut self.layers);
        if dispatch == Dispatch::Continue {
            dispatch = rgb::process_rgb_keycode(keycode, pressed, &mut self.rgb);
        }
        if dispatch == Dispatch::Continue {
            dispatch = self.firmware_action(keycode, pressed);
        }

        self.notify_layer_change();
        dispatch
    }

    /// Press or release the key at `row`, `column`. Returns the code it resolved to.
    pub fn key(
        &mut self,
        row: usize,
        column: usize,
        pressed: bool,
    ) -> Result<(u16, Dispatch), Error> {
        let keycode = V::KEYMAP.find_code(self.layers.active(), row, column)?;
        if self.debug.enable && self.debug.matrix {
            crate::debug!("matrix {}x{} {}", row, column, pressed);
        }
        Ok((keycode, self.process_key(keycode, pressed)))
    }

    /// One step of `encoder` in `direction`: a tap of the code it resolves to. The dispatch
    /// returned is the one of the key down.
    pub fn rotate(&mut self, encoder: Encoder, direction: Direction) -> (u16, Dispatch) {
        let keycode = V::ENCODER_MAP.find_code(self.layers.active(), encoder, direction);
        let dispatch = self.process_key(keycode, true);
        let _ = self.process_key(keycode, false);
        (keycode, dispatch)
    }

    fn firmware_action(&mut self, keycode: u16, pressed: bool) -> Dispatch {
        match keycode {
            key_range::FW_RESET_TO_BOOTLOADER => {
                if !pressed {
                    firmware_functions::reset_to_bootloader();
                }
                Dispatch::Consumed
            }
            key_range::FIRMWARE_MIN..=key_range::FIRMWARE_MAX => {
                crate::info!("not yet supported: {:?}", keycode);
                Dispatch::Consumed
            }
            _ => Dispatch::Continue,
        }
    }

    fn notify_layer_change(&mut self) {
        if let Some(state) = self.layers.take_changed() {
            let _ = navigator::on_layer_stack_changed::<V::Layer>(state, &mut self.rgb);
        }
    }
}

#[cfg(test)]
#[path = "keypad_test.rs"]
mod test;
