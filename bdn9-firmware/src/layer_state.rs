//! The set of active layers and the stack the firmware keeps of them.

/// Largest layer index a [LayerState] can hold.
pub const MAX_LAYER: u8 = 31;

/// Set of active layers, one bit per layer index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const EMPTY: Self = Self(0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The state where `layer` is the only active layer.
    pub const fn only(layer: u8) -> Self {
        if layer > MAX_LAYER {
            Self::EMPTY
        } else {
            Self(1 << layer)
        }
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, layer: u8) -> bool {
        layer <= MAX_LAYER && self.0 & (1 << layer) != 0
    }

    /// Index of the highest active layer; 0 when nothing is active.
    pub const fn highest(self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            (31 - self.0.leading_zeros()) as u8
        }
    }

    #[must_use]
    pub const fn with(self, layer: u8) -> Self {
        Self(self.0 | Self::only(layer).0)
    }

    #[must_use]
    pub const fn without(self, layer: u8) -> Self {
        Self(self.0 & !Self::only(layer).0)
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Active layer indexes, lowest first.
    pub fn iter(self) -> impl DoubleEndedIterator<Item = u8> {
        (0..=MAX_LAYER).filter(move |l| self.contains(*l))
    }
}

/// The firmware's layer stack: layers switched on at run time over the default layers.
///
/// Every mutation leaves a pending change notification that the dispatcher picks up with
/// [LayerStack::take_changed] and forwards to the layer-change callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerStack {
    state: LayerState,
    default: LayerState,
    changed: bool,
}

impl Default for LayerStack {
    fn default() -> Self {
        Self {
            state: LayerState::EMPTY,
            default: LayerState::only(0),
            changed: false,
        }
    }
}

impl LayerStack {
    pub fn state(&self) -> LayerState {
        self.state
    }

    pub fn default_state(&self) -> LayerState {
        self.default
    }

    /// Layers in effect: the run time layers together with the default layers.
    pub fn active(&self) -> LayerState {
        self.state.union(self.default)
    }

    pub fn highest(&self) -> u8 {
        self.active().highest()
    }

    /// Switch off every run time layer, leaving only the default layers.
    pub fn clear(&mut self) -> LayerState {
        self.set(LayerState::EMPTY)
    }

    /// Make `layer` the only run time layer.
    pub fn move_to(&mut self, layer: u8) -> LayerState {
        self.set(LayerState::only(layer))
    }

    pub fn on(&mut self, layer: u8) -> LayerState {
        self.set(self.state.with(layer))
    }

    pub fn off(&mut self, layer: u8) -> LayerState {
        self.set(self.state.without(layer))
    }

    pub fn set(&mut self, state: LayerState) -> LayerState {
        self.state = state;
        self.changed = true;
        state
    }

    /// The state to report if it has been set since the last call.
    pub fn take_changed(&mut self) -> Option<LayerState> {
        if core::mem::take(&mut self.changed) {
            Some(self.state)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "layer_state_test.rs"]
mod test;
