//! Display panel drivers

mod ls013b7dh05;

pub use ls013b7dh05::{Ls013b7dh05, PanelError};
