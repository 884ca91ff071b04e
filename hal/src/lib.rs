#![no_std]
mod gpio;
#[cfg(feature = "sim")]
pub mod sim;
#[cfg(feature = "stm32")]
pub mod stm32;

pub use gpio::*;
