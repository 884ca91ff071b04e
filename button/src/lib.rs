//! One digital pin behind one interface, whether it is a button, an LED or a constant.
//!
//! A [`DigitalPin`] pairs a [`mode::ModePolicy`] (how the pin is set up) with a
//! [`level::LevelPolicy`] (what voltage means "active"). Both are chosen by type, so nothing is
//! decided at runtime. Application code can hold any pairing as `&mut dyn DigitalButton`.
//!
//! ```ignore
//! let mut button = ButtonToGndPullUp::new(&gpio, PinId(2));
//! let mut led = Output::new(&gpio, PinId(13));
//! if button.active() {
//!     led.toggle();
//! }
//! ```
#![no_std]
pub mod level;
pub mod mode;
mod pin;

pub use gpio_button_common::{PinId, PinMode};
pub use gpio_button_hal::Gpio;
pub use pin::*;

/// Button that pulls the pin to VCC
pub type ButtonToVcc<G> = DigitalPin<G, mode::Input, level::ActiveHigh>;
/// Button that pulls the pin to GND
pub type ButtonToGnd<G> = DigitalPin<G, mode::Input, level::ActiveLow>;
/// Button that pulls the pin to GND, with the internal pull-up enabled
pub type ButtonToGndPullUp<G> = DigitalPin<G, mode::InputPullUp, level::ActiveLow>;
/// Always active. Never writes or reads the pin; dropping it still resets the pin to input.
pub type AlwaysOn<G> = DigitalPin<G, mode::NoMode, level::AlwaysActive>;
/// Always inactive. Never writes or reads the pin; dropping it still resets the pin to input.
pub type AlwaysOff<G> = DigitalPin<G, mode::NoMode, level::AlwaysInactive>;
pub type Output<G> = DigitalPin<G, mode::Output, level::ActiveHigh>;
/// Output where "on" drives the pin low
pub type InverseOutput<G> = DigitalPin<G, mode::Output, level::ActiveLow>;
