//! Wall-clock time model
//!
//! A calendar timestamp as the RTC reports it, plus the 12/24-hour
//! display conversion.

/// Clock validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// A field is outside its calendar range
    OutOfRange,
}

/// Whether hours are shown on a 12-hour or 24-hour dial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourStyle {
    /// 1-12 with no am/pm marker
    H12,
    /// 0-23
    #[default]
    H24,
}

/// A calendar timestamp
///
/// Fields use the ranges the DS3231 reports: month and day are 1-based,
/// hour/minute/second are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClock {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl WallClock {
    /// The time shown when the RTC has lost power and was never set
    pub const POWER_ON: WallClock = WallClock {
        year: 2000,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Check that every field is within its calendar range
    ///
    /// Day is only checked against 31; the face never computes with the
    /// day beyond printing it, so month-length pedantry buys nothing.
    pub fn validate(&self) -> Result<(), ClockError> {
        let ok = (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60;
        if ok {
            Ok(())
        } else {
            Err(ClockError::OutOfRange)
        }
    }

    /// The hour as it should appear on the dial
    ///
    /// 24-hour style passes through; 12-hour style maps 0 to 12 so
    /// midnight reads as 12, never 0.
    pub fn display_hour(&self, style: HourStyle) -> u8 {
        match style {
            HourStyle::H24 => self.hour,
            HourStyle::H12 => {
                let h = self.hour % 12;
                if h == 0 {
                    12
                } else {
                    h
                }
            }
        }
    }
}
