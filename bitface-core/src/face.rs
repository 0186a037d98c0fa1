//! Face model
//!
//! Snapshot of everything a renderer needs for one tick: the three text
//! fields and the state of every cell in the grid. Rebuilt from scratch
//! every second; nothing carries over between ticks.

use heapless::String;

use crate::bcd;
use crate::hobbit;
use crate::layout::{GRID_COLS, GRID_ROWS};
use crate::text;
use crate::time::{ClockError, HourStyle, WallClock};

/// How many binary digits each column can actually reach
///
/// Columns left to right: hours tens, hours units, minutes tens, minutes
/// units, seconds tens, seconds units. A tens-of-hours digit tops out at
/// 2, so it only ever needs 2 bits; tens of minutes/seconds top out at 5
/// and need 3. Rows a digit can never reach show no placeholder circle.
pub const COLUMN_BITS: [u8; GRID_COLS] = [2, 4, 3, 4, 3, 4];

/// State of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CellState {
    /// Row not shown for this column
    Hidden,
    /// Binary 0: ring only
    Empty,
    /// Binary 1: filled circle
    Filled,
}

/// Everything the renderer draws for one tick
#[derive(Debug, Clone)]
pub struct FaceModel {
    /// Month abbreviation, e.g. "Sep"
    pub month: &'static str,
    /// Day of month, space-padded to two characters
    pub day: String<2>,
    /// Hobbit-time phrase, absent when disabled in config
    pub hobbit: Option<&'static str>,
    /// Cell grid, indexed `[col][row]` with (0,0) the upper-left
    pub cells: [[CellState; GRID_ROWS]; GRID_COLS],
}

impl FaceModel {
    /// Build the model for a clock reading
    pub fn build(
        clock: &WallClock,
        style: HourStyle,
        hobbit_text: bool,
    ) -> Result<Self, ClockError> {
        clock.validate()?;

        let (hour_tens, hour_units) = bcd::split(clock.display_hour(style));
        let (min_tens, min_units) = bcd::split(clock.minute);
        let (sec_tens, sec_units) = bcd::split(clock.second);
        let digits = [
            hour_tens, hour_units, min_tens, min_units, sec_tens, sec_units,
        ];

        let mut cells = [[CellState::Hidden; GRID_ROWS]; GRID_COLS];
        for (col, (&digit, &bits)) in digits.iter().zip(COLUMN_BITS.iter()).enumerate() {
            for b in 0..bits {
                // Bit 0 lives in the bottom row, higher bits stack upward
                let row = GRID_ROWS - 1 - b as usize;
                cells[col][row] = if bcd::bit(digit, b) {
                    CellState::Filled
                } else {
                    CellState::Empty
                };
            }
        }

        // month is validated above, so the lookup cannot miss
        let month = text::month_abbrev(clock.month).ok_or(ClockError::OutOfRange)?;

        Ok(FaceModel {
            month,
            day: text::format_day(clock.day),
            hobbit: hobbit_text.then(|| hobbit::phrase_for_hour(clock.hour)),
            cells,
        })
    }

    /// Reassemble the decimal digit a column encodes
    ///
    /// Test helper, but also a statement of the invariant: the filled
    /// cells of a column are exactly the binary digits of its value.
    pub fn column_value(&self, col: usize) -> u8 {
        let mut value = 0;
        for (row, cell) in self.cells[col].iter().enumerate() {
            if *cell == CellState::Filled {
                value |= 1 << (GRID_ROWS - 1 - row);
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn clock(hour: u8, minute: u8, second: u8) -> WallClock {
        WallClock {
            year: 2026,
            month: 8,
            day: 27,
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn test_rejects_invalid_clock() {
        let mut bad = clock(12, 0, 0);
        bad.minute = 60;
        assert!(FaceModel::build(&bad, HourStyle::H24, true).is_err());
    }

    #[test]
    fn test_hidden_rows_per_column() {
        let model = FaceModel::build(&clock(23, 59, 59), HourStyle::H24, true).unwrap();
        for (col, &bits) in COLUMN_BITS.iter().enumerate() {
            for row in 0..GRID_ROWS {
                let shown = row >= GRID_ROWS - bits as usize;
                assert_eq!(
                    model.cells[col][row] != CellState::Hidden,
                    shown,
                    "col {col} row {row}"
                );
            }
        }
    }

    #[test]
    fn test_known_pattern() {
        // 21:47:56 -> digits 2,1,4,7,5,6
        let model = FaceModel::build(&clock(21, 47, 56), HourStyle::H24, true).unwrap();
        assert_eq!(model.column_value(0), 2);
        assert_eq!(model.column_value(1), 1);
        assert_eq!(model.column_value(2), 4);
        assert_eq!(model.column_value(3), 7);
        assert_eq!(model.column_value(4), 5);
        assert_eq!(model.column_value(5), 6);

        // digit 7 = 0b0111: top units row empty, lower three filled
        assert_eq!(model.cells[3][0], CellState::Empty);
        assert_eq!(model.cells[3][1], CellState::Filled);
        assert_eq!(model.cells[3][2], CellState::Filled);
        assert_eq!(model.cells[3][3], CellState::Filled);
    }

    #[test]
    fn test_text_fields() {
        let model = FaceModel::build(&clock(9, 0, 0), HourStyle::H24, true).unwrap();
        assert_eq!(model.month, "Aug");
        assert_eq!(model.day.as_str(), "27");
        assert_eq!(model.hobbit, Some("second breakfast"));

        let plain = FaceModel::build(&clock(9, 0, 0), HourStyle::H24, false).unwrap();
        assert_eq!(plain.hobbit, None);
    }

    #[test]
    fn test_12h_midnight_shows_12() {
        let model = FaceModel::build(&clock(0, 0, 0), HourStyle::H12, false).unwrap();
        assert_eq!(model.column_value(0), 1);
        assert_eq!(model.column_value(1), 2);
    }

    proptest! {
        #[test]
        fn prop_columns_reencode_time(
            hour in 0u8..24,
            minute in 0u8..60,
            second in 0u8..60,
        ) {
            let model =
                FaceModel::build(&clock(hour, minute, second), HourStyle::H24, true).unwrap();
            prop_assert_eq!(model.column_value(0) * 10 + model.column_value(1), hour);
            prop_assert_eq!(model.column_value(2) * 10 + model.column_value(3), minute);
            prop_assert_eq!(model.column_value(4) * 10 + model.column_value(5), second);
        }

        #[test]
        fn prop_digits_fit_their_columns(
            hour in 0u8..24,
            minute in 0u8..60,
            second in 0u8..60,
            style in prop_oneof![Just(HourStyle::H12), Just(HourStyle::H24)],
        ) {
            let model =
                FaceModel::build(&clock(hour, minute, second), style, true).unwrap();
            // No digit ever needs a row its column hides
            for (col, &bits) in COLUMN_BITS.iter().enumerate() {
                prop_assert!(model.column_value(col) < (1 << bits));
            }
        }
    }
}
