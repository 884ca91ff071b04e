//! Mode policies decide how a pin is configured when a [`DigitalPin`](crate::DigitalPin) is
//! created.

use gpio_button_common::{PinId, PinMode};
use gpio_button_hal::Gpio;

pub trait ModePolicy {
    /// The mode applied on creation, or `None` if the pin is never configured.
    const MODE: Option<PinMode>;

    fn init<G: Gpio + ?Sized>(gpio: &G, pin: PinId) {
        if let Some(mode) = Self::MODE {
            gpio.configure(pin, mode);
        }
    }
}

/// Floating input. Use this when the circuit has its own pull resistor.
pub struct Input;

/// Input with the internal pull-up enabled, for switches wired to GND without a resistor.
pub struct InputPullUp;

pub struct Output;

/// Leaves the pin alone. For pins that are never really read or written.
pub struct NoMode;

impl ModePolicy for Input {
    const MODE: Option<PinMode> = Some(PinMode::Input);
}

impl ModePolicy for InputPullUp {
    const MODE: Option<PinMode> = Some(PinMode::InputPullUp);
}

impl ModePolicy for Output {
    const MODE: Option<PinMode> = Some(PinMode::Output);
}

impl ModePolicy for NoMode {
    const MODE: Option<PinMode> = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpio_button_hal::sim::SimGpio;

    const PIN: PinId = PinId(1);

    #[test]
    fn configures_the_pin_once() {
        let gpio = SimGpio::<2>::new();
        Output::init(&gpio, PIN);
        assert_eq!(gpio.pin(PIN).mode, PinMode::Output);
        assert_eq!(gpio.pin(PIN).configure_count, 1);

        InputPullUp::init(&gpio, PIN);
        assert_eq!(gpio.pin(PIN).mode, PinMode::InputPullUp);

        Input::init(&gpio, PIN);
        assert_eq!(gpio.pin(PIN).mode, PinMode::Input);
        assert_eq!(gpio.pin(PIN).configure_count, 3);
    }

    #[test]
    fn no_mode_does_not_touch_the_pin() {
        let gpio = SimGpio::<2>::new();
        Output::init(&gpio, PIN);
        NoMode::init(&gpio, PIN);
        assert_eq!(gpio.pin(PIN).mode, PinMode::Output);
        assert_eq!(gpio.pin(PIN).configure_count, 1);
    }
}
