//! Peripheral drivers for the A Bit Different face
//!
//! - `rtc::Ds3231`: I2C real-time clock, the face's `TimeSource`
//! - `panel::Ls013b7dh05`: 144x168 Sharp memory-in-pixel LCD over SPI
//!
//! Drivers are generic over `embedded-hal-async` buses; the pure
//! register/wire conversions are plain functions so they test on the
//! host.

#![no_std]
#![deny(unsafe_code)]

pub mod panel;
pub mod rtc;

pub use panel::{Ls013b7dh05, PanelError};
pub use rtc::{Ds3231, Ds3231Error};
