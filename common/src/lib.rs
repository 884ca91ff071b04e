#![no_std]

use strum::{AsRefStr, Display, EnumCount, VariantArray};

/// Names a physical pin on whatever port the pin belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PinId(pub u8);

impl PinId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for PinId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<PinId> for u8 {
    fn from(value: PinId) -> Self {
        value.0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinId {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "P{}", self.0);
    }
}

/// Electrical role of a pin
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumCount, VariantArray, Display, AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum PinMode {
    /// Floating digital input
    #[default]
    Input,
    /// Digital input with the internal pull-up resistor enabled
    InputPullUp,
    Output,
}

impl PinMode {
    pub fn pull_up_enabled(&self) -> bool {
        matches!(self, Self::InputPullUp)
    }

    pub fn is_output(&self) -> bool {
        matches!(self, Self::Output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_plain_input() {
        assert_eq!(PinMode::default(), PinMode::Input);
        assert!(!PinMode::default().pull_up_enabled());
    }

    #[test]
    fn mode_names_are_snake_case() {
        assert_eq!(PinMode::InputPullUp.as_ref(), "input_pull_up");
        assert_eq!(PinMode::COUNT, PinMode::VARIANTS.len());
    }

    #[test]
    fn pin_id_converts_from_u8() {
        let pin = PinId::from(13);
        assert_eq!(pin.index(), 13);
        assert_eq!(u8::from(pin), 13);
    }
}
