//! Colour values for the underglow.

/// Hues on the 0..=255 colour wheel.
pub mod hue {
    pub const GREEN: u8 = 85;
    pub const BLUE: u8 = 170;
    pub const VIOLET: u8 = 201;
}

/// A hue and saturation without brightness. Layer colours are expressed this way so that the
/// brightness the user chose is kept when the layer changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HueSat {
    pub hue: u8,
    pub sat: u8,
}

impl HueSat {
    /// Hue 0 at saturation 0; white at whatever brightness is set.
    pub const UNSATURATED: Self = Self::new(0, 0);

    pub const fn new(hue: u8, sat: u8) -> Self {
        Self { hue, sat }
    }

    /// `hue` at full saturation.
    pub const fn full(hue: u8) -> Self {
        Self::new(hue, u8::MAX)
    }

    pub const fn with_val(self, val: u8) -> Hsv {
        Hsv::new(self.hue, self.sat, val)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsv {
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
}

impl Hsv {
    pub const WHITE: Self = Self::new(0, 0, u8::MAX);

    pub const fn new(hue: u8, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }

    pub const fn hue_sat(self) -> HueSat {
        HueSat::new(self.hue, self.sat)
    }
}

#[cfg(test)]
#[path = "color_test.rs"]
mod test;
