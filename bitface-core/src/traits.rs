//! Hardware abstraction traits
//!
//! The face task only ever asks "what time is it"; this trait keeps it
//! ignorant of which RTC chip answers.

use crate::time::WallClock;

/// Errors a time source can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Bus communication failed
    Bus,
    /// The source lost power and holds no trustworthy time
    Unset,
    /// The source returned a reading that fails validation
    Invalid,
}

/// A source of wall-clock time
#[allow(async_fn_in_trait)]
pub trait TimeSource {
    /// Read the current time
    async fn now(&mut self) -> Result<WallClock, TimeError>;
}
