//! A simulated port for running pin logic on the host.

use core::cell::RefCell;

use crate::*;
use embassy_sync::blocking_mutex::{Mutex, raw::NoopRawMutex};

/// Everything the simulated port knows about one pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimPin {
    pub mode: PinMode,
    pub latch: PinState,
    /// Level forced onto the pin from outside, e.g. by a closed switch.
    /// `None` if nothing is connected.
    pub external: Option<PinState>,
    pub configure_count: usize,
    pub write_count: usize,
    pub read_count: usize,
}

impl SimPin {
    const RESET: Self = Self {
        mode: PinMode::Input,
        latch: PinState::Low,
        external: None,
        configure_count: 0,
        write_count: 0,
        read_count: 0,
    };

    /// The level the pin would read right now.
    /// A floating input with nothing connected reads low.
    pub fn resolved_level(&self) -> PinState {
        match (self.mode, self.external) {
            (PinMode::Output, _) => self.latch,
            (_, Some(level)) => level,
            (PinMode::InputPullUp, None) => PinState::High,
            (PinMode::Input, None) => PinState::Low,
        }
    }
}

/// `N` simulated pins, all starting as unconnected floating inputs.
pub struct SimGpio<const N: usize> {
    pins: Mutex<NoopRawMutex, RefCell<[SimPin; N]>>,
}

impl<const N: usize> Default for SimGpio<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SimGpio<N> {
    pub fn new() -> Self {
        Self {
            pins: Mutex::new(RefCell::new([SimPin::RESET; N])),
        }
    }

    /// Runs `f` on the pin, or returns `None` if the port has no such pin.
    fn with_pin<R>(&self, pin: PinId, f: impl FnOnce(&mut SimPin) -> R) -> Option<R> {
        self.pins.lock(|pins| {
            let mut pins = pins.borrow_mut();
            let sim_pin = pins.get_mut(pin.index());
            if sim_pin.is_none() {
                #[cfg(feature = "defmt")]
                defmt::warn!("{} is not part of this port of {} pins. ignoring.", pin, N);
            }
            sim_pin.map(f)
        })
    }

    /// Snapshot of a pin. Does not count as a read.
    ///
    /// # Panics
    /// If the port has no such pin.
    pub fn pin(&self, pin: PinId) -> SimPin {
        match self.with_pin(pin, |sim_pin| *sim_pin) {
            Some(sim_pin) => sim_pin,
            None => panic!("pin {} is not part of this port of {} pins", pin.0, N),
        }
    }

    /// Force a level onto the pin from outside, like wiring a switch to VCC or GND and closing it.
    pub fn connect(&self, pin: PinId, level: PinState) {
        self.with_pin(pin, |sim_pin| sim_pin.external = Some(level));
    }

    /// Leave the pin unconnected.
    pub fn disconnect(&self, pin: PinId) {
        self.with_pin(pin, |sim_pin| sim_pin.external = None);
    }
}

impl<const N: usize> Gpio for SimGpio<N> {
    fn configure(&self, pin: PinId, mode: PinMode) {
        self.with_pin(pin, |sim_pin| {
            sim_pin.mode = mode;
            sim_pin.configure_count += 1;
        });
    }

    fn set_level(&self, pin: PinId, level: PinState) {
        self.with_pin(pin, |sim_pin| {
            if sim_pin.mode.is_output()
                && let Some(external) = sim_pin.external
                && external != level
            {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "{} driven {} against an external {}",
                    pin,
                    defmt::Debug2Format(&level),
                    defmt::Debug2Format(&external)
                );
            }
            sim_pin.latch = level;
            sim_pin.write_count += 1;
        });
    }

    fn level(&self, pin: PinId) -> PinState {
        self.with_pin(pin, |sim_pin| {
            sim_pin.read_count += 1;
            sim_pin.resolved_level()
        })
        .unwrap_or(PinState::Low)
    }
}
