pub use embedded_hal::digital::PinState;
pub use gpio_button_common::{PinId, PinMode};

/// A port of digital pins addressed by [`PinId`].
///
/// Every operation is assumed to succeed. Methods take `&self` so one port handle can be
/// shared by many pin instances; implementations that need exclusive access to the
/// hardware must provide it internally.
///
/// An id the port has no pin for is not an error: configuring or writing it does nothing and
/// reading it gives [`PinState::Low`].
///
/// Nothing here stops two users from touching the same pin at once.
/// Keeping at most one owner per pin is up to the caller.
pub trait Gpio {
    fn configure(&self, pin: PinId, mode: PinMode);
    /// Drive the pin's output latch. This is only meaningful if the pin was configured as
    /// [`PinMode::Output`].
    fn set_level(&self, pin: PinId, level: PinState);
    /// Read the physical level present on the pin.
    fn level(&self, pin: PinId) -> PinState;
}

impl<T: Gpio + ?Sized> Gpio for &T {
    fn configure(&self, pin: PinId, mode: PinMode) {
        T::configure(self, pin, mode)
    }

    fn set_level(&self, pin: PinId, level: PinState) {
        T::set_level(self, pin, level)
    }

    fn level(&self, pin: PinId) -> PinState {
        T::level(self, pin)
    }
}
