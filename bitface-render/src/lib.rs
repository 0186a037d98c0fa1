//! Frame buffer and face renderer
//!
//! This crate owns the 1-bpp frame for the 144x168 memory LCD and the
//! embedded-graphics code that draws a `FaceModel` into it. It knows
//! nothing about SPI; the panel driver consumes packed lines from the
//! frame.

#![no_std]
#![deny(unsafe_code)]

pub mod face;
pub mod frame;

pub use face::{draw_face, render_face};
pub use frame::Frame;
