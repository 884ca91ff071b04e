//! Level policies map the logical "active" state onto the voltage written to or read from a pin.

use gpio_button_common::PinId;
use gpio_button_hal::{Gpio, PinState};

pub trait LevelPolicy {
    /// Used in log messages
    const NAME: &'static str;

    fn write<G: Gpio + ?Sized>(gpio: &G, pin: PinId, on: bool);
    fn read<G: Gpio + ?Sized>(gpio: &G, pin: PinId) -> bool;
}

/// Active means high
pub struct ActiveHigh;

/// Active means low, e.g. a switch that pulls the pin to GND
pub struct ActiveLow;

/// Always reports active and never touches the pin.
pub struct AlwaysActive;

/// Always reports inactive and never touches the pin.
pub struct AlwaysInactive;

impl LevelPolicy for ActiveHigh {
    const NAME: &'static str = "active_high";

    fn write<G: Gpio + ?Sized>(gpio: &G, pin: PinId, on: bool) {
        gpio.set_level(pin, PinState::from(on));
    }

    fn read<G: Gpio + ?Sized>(gpio: &G, pin: PinId) -> bool {
        gpio.level(pin) == PinState::High
    }
}

impl LevelPolicy for ActiveLow {
    const NAME: &'static str = "active_low";

    fn write<G: Gpio + ?Sized>(gpio: &G, pin: PinId, on: bool) {
        gpio.set_level(pin, !PinState::from(on));
    }

    fn read<G: Gpio + ?Sized>(gpio: &G, pin: PinId) -> bool {
        gpio.level(pin) == PinState::Low
    }
}

impl LevelPolicy for AlwaysActive {
    const NAME: &'static str = "always_active";

    fn write<G: Gpio + ?Sized>(_gpio: &G, _pin: PinId, _on: bool) {}

    fn read<G: Gpio + ?Sized>(_gpio: &G, _pin: PinId) -> bool {
        true
    }
}

impl LevelPolicy for AlwaysInactive {
    const NAME: &'static str = "always_inactive";

    fn write<G: Gpio + ?Sized>(_gpio: &G, _pin: PinId, _on: bool) {}

    fn read<G: Gpio + ?Sized>(_gpio: &G, _pin: PinId) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpio_button_common::PinMode;
    use gpio_button_hal::sim::SimGpio;

    const PIN: PinId = PinId(0);

    fn output_gpio() -> SimGpio<1> {
        let gpio = SimGpio::new();
        gpio.configure(PIN, PinMode::Output);
        gpio
    }

    /// Writes `on` then reads back through the same policy.
    fn write_then_read<L: LevelPolicy>(gpio: &SimGpio<1>, on: bool) -> bool {
        L::write(gpio, PIN, on);
        L::read(gpio, PIN)
    }

    #[test]
    fn active_high_reads_back_what_was_written() {
        let gpio = output_gpio();
        assert!(write_then_read::<ActiveHigh>(&gpio, true));
        assert_eq!(gpio.pin(PIN).latch, PinState::High);
        assert!(!write_then_read::<ActiveHigh>(&gpio, false));
        assert_eq!(gpio.pin(PIN).latch, PinState::Low);
    }

    #[test]
    fn active_low_inverts_the_voltage() {
        let gpio = output_gpio();
        assert!(write_then_read::<ActiveLow>(&gpio, true));
        assert_eq!(gpio.pin(PIN).latch, PinState::Low);
        assert!(!write_then_read::<ActiveLow>(&gpio, false));
        assert_eq!(gpio.pin(PIN).latch, PinState::High);
    }

    #[test]
    fn constant_policies_ignore_writes() {
        let gpio = output_gpio();
        for on in [true, false] {
            assert!(write_then_read::<AlwaysActive>(&gpio, on));
            assert!(!write_then_read::<AlwaysInactive>(&gpio, on));
        }
        let sim_pin = gpio.pin(PIN);
        assert_eq!(sim_pin.write_count, 0);
        assert_eq!(sim_pin.read_count, 0);
    }

    #[test]
    fn reads_the_physical_level_of_inputs() {
        let gpio = SimGpio::<1>::new();
        gpio.configure(PIN, PinMode::InputPullUp);
        assert!(ActiveHigh::read(&gpio, PIN));
        assert!(!ActiveLow::read(&gpio, PIN));

        gpio.connect(PIN, PinState::Low);
        assert!(!ActiveHigh::read(&gpio, PIN));
        assert!(ActiveLow::read(&gpio, PIN));
    }
}
