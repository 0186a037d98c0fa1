//! Board-agnostic logic for the "A Bit Different" binary watch face
//!
//! This crate contains everything the face needs that does not touch
//! hardware:
//!
//! - Wall-clock model and validation
//! - Binary-coded-decimal digit splitting
//! - Cell-grid layout math for the 144x168 panel
//! - Hobbit-time phrase table
//! - Month/date text formatting
//! - The `FaceModel` snapshot a renderer draws from
//! - The `TimeSource` trait the RTC driver implements

#![no_std]
#![deny(unsafe_code)]

pub mod bcd;
pub mod face;
pub mod hobbit;
pub mod layout;
pub mod text;
pub mod time;
pub mod traits;

pub use face::{CellState, FaceModel};
pub use time::{HourStyle, WallClock};
pub use traits::{TimeError, TimeSource};
