use core::cell::RefCell;

use crate::*;
use embassy_stm32::gpio::{Flex, Level, Pull, Speed};
use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

fn get_pull(mode: PinMode) -> Pull {
    if mode.pull_up_enabled() {
        Pull::Up
    } else {
        Pull::None
    }
}

/// A port made of STM32 [`Flex`] pins. [`PinId`] `n` addresses the `n`th pin passed to
/// [`Stm32Gpio::new`]. Ids past the end are ignored and read low.
pub struct Stm32Gpio<'a, const N: usize> {
    pins: Mutex<CriticalSectionRawMutex, RefCell<[Flex<'a>; N]>>,
    speed: Speed,
}

impl<'a, const N: usize> Stm32Gpio<'a, N> {
    /// `speed` is used for every pin configured as an output.
    pub fn new(pins: [Flex<'a>; N], speed: Speed) -> Self {
        Self {
            pins: Mutex::new(RefCell::new(pins)),
            speed,
        }
    }

    /// Runs `f` on the pin, or returns `None` if the port has no such pin.
    fn with_pin<R>(&self, pin: PinId, f: impl FnOnce(&mut Flex<'a>) -> R) -> Option<R> {
        self.pins.lock(|pins| {
            let mut pins = pins.borrow_mut();
            let flex = pins.get_mut(pin.index());
            if flex.is_none() {
                #[cfg(feature = "defmt")]
                defmt::warn!("{} is not part of this port of {} pins. ignoring.", pin, N);
            }
            flex.map(f)
        })
    }
}

impl<const N: usize> Gpio for Stm32Gpio<'_, N> {
    fn configure(&self, pin: PinId, mode: PinMode) {
        let speed = self.speed;
        self.with_pin(pin, |flex| match mode {
            PinMode::Output => flex.set_as_output(speed),
            PinMode::Input | PinMode::InputPullUp => flex.set_as_input(get_pull(mode)),
        });
    }

    fn set_level(&self, pin: PinId, level: PinState) {
        self.with_pin(pin, |flex| flex.set_level(Level::from(bool::from(level))));
    }

    fn level(&self, pin: PinId) -> PinState {
        self.with_pin(pin, |flex| bool::from(flex.get_level()).into())
            .unwrap_or(PinState::Low)
    }
}
