use core::{convert::Infallible, marker::PhantomData};

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use gpio_button_common::{PinId, PinMode};
use gpio_button_hal::Gpio;

use crate::{level::LevelPolicy, mode::ModePolicy};

/// Something that can be switched on and off and asked whether it is active:
/// a button, an LED, or a constant.
///
/// All methods are immediate and cannot fail.
pub trait DigitalButton {
    fn on(&mut self);
    fn off(&mut self);
    /// Re-reads the state every time
    fn active(&self) -> bool;

    /// Reads once, then writes the opposite once.
    fn toggle(&mut self) {
        if self.active() {
            self.off();
        } else {
            self.on();
        }
    }
}

impl<T: DigitalButton + ?Sized> DigitalButton for &mut T {
    fn on(&mut self) {
        T::on(self)
    }

    fn off(&mut self) {
        T::off(self)
    }

    fn active(&self) -> bool {
        T::active(self)
    }

    fn toggle(&mut self) {
        T::toggle(self)
    }
}

/// A pin on `G` configured by `M` on creation, with its levels interpreted by `L`.
///
/// The state right after creation is whatever the pin happens to read.
/// Call [`DigitalButton::on`] or [`DigitalButton::off`] if you need a known starting state.
///
/// Dropping the pin puts it back into plain input mode, whatever `M` configured.
///
/// Only create one of these per physical pin at a time.
pub struct DigitalPin<G: Gpio, M: ModePolicy, L: LevelPolicy> {
    gpio: G,
    pin: PinId,
    _policies: PhantomData<(M, L)>,
}

impl<G: Gpio, M: ModePolicy, L: LevelPolicy> DigitalPin<G, M, L> {
    pub fn new(gpio: G, pin: PinId) -> Self {
        M::init(&gpio, pin);
        #[cfg(feature = "defmt")]
        defmt::trace!("{} set up as {}, {}", pin, M::MODE, L::NAME);
        Self {
            gpio,
            pin,
            _policies: PhantomData,
        }
    }

    pub fn pin(&self) -> PinId {
        self.pin
    }
}

impl<G: Gpio, M: ModePolicy, L: LevelPolicy> DigitalButton for DigitalPin<G, M, L> {
    fn on(&mut self) {
        L::write(&self.gpio, self.pin, true);
    }

    fn off(&mut self) {
        L::write(&self.gpio, self.pin, false);
    }

    fn active(&self) -> bool {
        L::read(&self.gpio, self.pin)
    }
}

impl<G: Gpio, M: ModePolicy, L: LevelPolicy> Drop for DigitalPin<G, M, L> {
    fn drop(&mut self) {
        self.gpio.configure(self.pin, PinMode::Input);
        #[cfg(feature = "defmt")]
        defmt::trace!("{} reset to input", self.pin);
    }
}

// Through embedded-hal, "high" is the logical active state, not the voltage.

impl<G: Gpio, M: ModePolicy, L: LevelPolicy> ErrorType for DigitalPin<G, M, L> {
    type Error = Infallible;
}

impl<G: Gpio, M: ModePolicy, L: LevelPolicy> InputPin for DigitalPin<G, M, L> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.active())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.active())
    }
}

impl<G: Gpio, M: ModePolicy, L: LevelPolicy> OutputPin for DigitalPin<G, M, L> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.off();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.on();
        Ok(())
    }
}

impl<G: Gpio, M: ModePolicy, L: LevelPolicy> StatefulOutputPin for DigitalPin<G, M, L> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.active())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.active())
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        DigitalButton::toggle(self);
        Ok(())
    }
}
