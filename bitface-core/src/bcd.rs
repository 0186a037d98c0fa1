//! Binary-coded-decimal digit splitting
//!
//! The grid shows one column per decimal digit, so the face only ever
//! needs a value split into tens/units and individual bits of a digit.

/// Split a value 0-99 into (tens, units)
pub const fn split(value: u8) -> (u8, u8) {
    (value / 10, value % 10)
}

/// Extract one binary digit of a decimal digit
///
/// Bit 0 is the least significant (bottom row of the column).
pub const fn bit(digit: u8, bit: u8) -> bool {
    (digit >> bit) & 0x1 == 1
}
