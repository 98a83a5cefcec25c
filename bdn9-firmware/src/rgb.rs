use bdn9_common::{
    color::{HueSat, Hsv},
    keycodes::key_range,
};

use crate::navigator::Dispatch;

/// Brightness change per value step.
pub const VAL_STEP: u8 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    #[default]
    StaticLight,
    Breathing,
}

/// The underglow registers. Writes take effect immediately; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbLight {
    enabled: bool,
    mode: Mode,
    hsv: Hsv,
}

impl Default for RgbLight {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: Mode::default(),
            hsv: Hsv::WHITE,
        }
    }
}

impl RgbLight {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn hue_sat(&self) -> HueSat {
        self.hsv.hue_sat()
    }

    pub fn val(&self) -> u8 {
        self.hsv.val
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_hsv(&mut self, hsv: Hsv) {
        self.hsv = hsv;
    }

    /// Set hue and saturation, keeping the current brightness.
    pub fn set_hs(&mut self, hs: HueSat) {
        self.set_hsv(hs.with_val(self.hsv.val));
    }

    pub fn increase_val(&mut self) {
        self.hsv.val = self.hsv.val.saturating_add(VAL_STEP);
    }

    pub fn decrease_val(&mut self) {
        self.hsv.val = self.hsv.val.saturating_sub(VAL_STEP);
    }
}

/// Handle the underglow keycodes. They act on key down; both transitions are consumed so that
/// nothing is reported to the host for them.
pub fn process_rgb_keycode(keycode: u16, pressed: bool, rgb: &mut RgbLight) -> Dispatch {
    if !(key_range::RGB_MIN..=key_range::RGB_MAX).contains(&keycode) {
        return Dispatch::Continue;
    }
    if pressed {
        match keycode {
            key_range::RGB_TOGGLE => rgb.toggle(),
            key_range::RGB_VAL_UP => rgb.increase_val(),
            key_range::RGB_VAL_DOWN => rgb.decrease_val(),
            _ => {
                crate::info!("not yet supported: {:?}", keycode);
            }
        }
        crate::debug!("rgb val {}", rgb.val());
    }
    Dispatch::Consumed
}

#[cfg(test)]
#[path = "rgb_test.rs"]
mod test;
