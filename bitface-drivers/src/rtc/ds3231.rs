//! DS3231 real-time clock
//!
//! I2C RTC with an internal temperature-compensated oscillator. The chip
//! keeps calendar time in packed BCD across seven registers; decoding
//! and encoding are pure functions so the host tests cover them.
//!
//! The oscillator-stop flag (OSF) is checked on every read: when the
//! backup supply has been lost the register contents are garbage and the
//! caller gets `OscillatorStopped` until the clock is set again.

use bitface_core::time::WallClock;
use bitface_core::traits::{TimeError, TimeSource};

/// Fixed I2C address of the DS3231
const DS3231_ADDR: u8 = 0x68;

/// Register map
mod reg {
    pub const SECONDS: u8 = 0x00;
    pub const CONTROL: u8 = 0x0E;
    pub const STATUS: u8 = 0x0F;
}

/// Oscillator-stop flag in the status register
const STATUS_OSF: u8 = 0x80;

/// 12-hour mode select in the hours register
const HOURS_MODE_12H: u8 = 0x40;

/// PM flag in the hours register (12-hour mode only)
const HOURS_PM: u8 = 0x20;

/// Century flag in the month register
const MONTH_CENTURY: u8 = 0x80;

/// DS3231 driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ds3231Error<E> {
    /// I2C transaction failed
    Bus(E),
    /// The oscillator stopped since the clock was last set
    OscillatorStopped,
    /// Registers decoded to an impossible calendar time
    Invalid,
}

impl<E> From<E> for Ds3231Error<E> {
    fn from(e: E) -> Self {
        Ds3231Error::Bus(e)
    }
}

/// DS3231 real-time clock driver
pub struct Ds3231<I2C> {
    i2c: I2C,
}

impl<I2C> Ds3231<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Create a new driver
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Read the current time
    pub async fn read_time(&mut self) -> Result<WallClock, Ds3231Error<I2C::Error>> {
        if self.oscillator_stopped().await? {
            return Err(Ds3231Error::OscillatorStopped);
        }

        let mut raw = [0u8; 7];
        self.i2c
            .write_read(DS3231_ADDR, &[reg::SECONDS], &mut raw)
            .await?;

        decode_registers(&raw).ok_or(Ds3231Error::Invalid)
    }

    /// Set the clock and clear the oscillator-stop flag
    ///
    /// The hours register is always written in 24-hour mode; 12-hour
    /// display is a rendering concern, not a timekeeping one.
    pub async fn set_time(&mut self, clock: &WallClock) -> Result<(), Ds3231Error<I2C::Error>> {
        let raw = encode_registers(clock).ok_or(Ds3231Error::Invalid)?;
        let mut buf = [0u8; 8];
        buf[0] = reg::SECONDS;
        buf[1..].copy_from_slice(&raw);
        self.i2c.write(DS3231_ADDR, &buf).await?;

        // Writing the seconds register restarts the count; clear OSF so
        // subsequent reads trust the registers again.
        self.clear_oscillator_stop().await
    }

    /// Whether the oscillator-stop flag is raised
    pub async fn oscillator_stopped(&mut self) -> Result<bool, Ds3231Error<I2C::Error>> {
        let mut status = [0u8; 1];
        self.i2c
            .write_read(DS3231_ADDR, &[reg::STATUS], &mut status)
            .await?;
        Ok(status[0] & STATUS_OSF != 0)
    }

    async fn clear_oscillator_stop(&mut self) -> Result<(), Ds3231Error<I2C::Error>> {
        let mut status = [0u8; 1];
        self.i2c
            .write_read(DS3231_ADDR, &[reg::STATUS], &mut status)
            .await?;
        self.i2c
            .write(DS3231_ADDR, &[reg::STATUS, status[0] & !STATUS_OSF])
            .await?;
        // Make sure the oscillator runs on battery too
        self.i2c.write(DS3231_ADDR, &[reg::CONTROL, 0x00]).await?;
        Ok(())
    }
}

impl<I2C> TimeSource for Ds3231<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    async fn now(&mut self) -> Result<WallClock, TimeError> {
        self.read_time().await.map_err(|e| match e {
            Ds3231Error::Bus(_) => TimeError::Bus,
            Ds3231Error::OscillatorStopped => TimeError::Unset,
            Ds3231Error::Invalid => TimeError::Invalid,
        })
    }
}

/// Decode the seven timekeeping registers into a wall clock
///
/// Register order: seconds, minutes, hours, weekday, day, month, year.
/// Returns `None` when the decoded fields fail calendar validation.
fn decode_registers(raw: &[u8; 7]) -> Option<WallClock> {
    let second = bcd_decode(raw[0] & 0x7F);
    let minute = bcd_decode(raw[1] & 0x7F);

    let hour = if raw[2] & HOURS_MODE_12H != 0 {
        // 12-hour mode: 1-12 plus a PM flag
        let h = bcd_decode(raw[2] & 0x1F) % 12;
        if raw[2] & HOURS_PM != 0 {
            h + 12
        } else {
            h
        }
    } else {
        bcd_decode(raw[2] & 0x3F)
    };

    let day = bcd_decode(raw[4] & 0x3F);
    let month = bcd_decode(raw[5] & !MONTH_CENTURY & 0x1F);
    let century = if raw[5] & MONTH_CENTURY != 0 { 100 } else { 0 };
    let year = 2000 + century + bcd_decode(raw[6]) as u16;

    let clock = WallClock {
        year,
        month,
        day,
        hour,
        minute,
        second,
    };
    clock.validate().ok()?;
    Some(clock)
}

/// Encode a wall clock into the seven timekeeping registers
fn encode_registers(clock: &WallClock) -> Option<[u8; 7]> {
    clock.validate().ok()?;
    if !(2000..2200).contains(&clock.year) {
        return None;
    }

    let century = if clock.year >= 2100 { MONTH_CENTURY } else { 0 };
    Some([
        bcd_encode(clock.second),
        bcd_encode(clock.minute),
        bcd_encode(clock.hour), // 24-hour mode: bit 6 left clear
        1,                      // weekday, unused by the face
        bcd_encode(clock.day),
        bcd_encode(clock.month) | century,
        bcd_encode((clock.year % 100) as u8),
    ])
}

/// Packed BCD byte to binary (0x59 -> 59)
const fn bcd_decode(b: u8) -> u8 {
    (b >> 4) * 10 + (b & 0x0F)
}

/// Binary 0-99 to packed BCD (59 -> 0x59)
const fn bcd_encode(v: u8) -> u8 {
    ((v / 10) << 4) | (v % 10)
}
