//! Face renderer
//!
//! Draws a `FaceModel` onto any monochrome draw target. Unfilled cells
//! keep the original trick: fill the whole circle in the foreground,
//! then fill an inner circle in the background to leave a ring.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X13};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};

use bitface_core::face::{CellState, FaceModel};
use bitface_core::layout::{self, CIRCLE_LINE_THICKNESS, CIRCLE_RADIUS};

use crate::frame::Frame;

/// Outer circle diameter; odd so the circle is symmetric about the center
const CELL_DIAMETER: u32 = 2 * CIRCLE_RADIUS + 1;

/// Inner diameter leaving a ring of the configured thickness
const RING_HOLE_DIAMETER: u32 = 2 * (CIRCLE_RADIUS - CIRCLE_LINE_THICKNESS) + 1;

/// Where the month abbreviation starts
const MONTH_ORIGIN: Point = Point::new(2, 4);

/// Where the day-of-month starts, to the right of the month
const DAY_ORIGIN: Point = Point::new(40, 4);

/// Where the hobbit-time phrase starts, on the second header line
const HOBBIT_ORIGIN: Point = Point::new(2, 30);

/// Draw one cell circle
///
/// Filled cells are a solid disc; empty cells get the background punched
/// back out of the middle.
fn draw_cell<D>(target: &mut D, center: Point, filled: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Circle::with_center(center, CELL_DIAMETER)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)?;

    if !filled {
        Circle::with_center(center, RING_HOLE_DIAMETER)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(target)?;
    }

    Ok(())
}

/// Draw the whole face: dark background, header text, cell grid
pub fn draw_face<D>(target: &mut D, model: &FaceModel) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    let header = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
    Text::with_baseline(model.month, MONTH_ORIGIN, header, Baseline::Top).draw(target)?;
    Text::with_baseline(model.day.as_str(), DAY_ORIGIN, header, Baseline::Top).draw(target)?;

    if let Some(phrase) = model.hobbit {
        let small = MonoTextStyle::new(&FONT_6X13, BinaryColor::On);
        Text::with_baseline(phrase, HOBBIT_ORIGIN, small, Baseline::Top).draw(target)?;
    }

    for (col, column) in model.cells.iter().enumerate() {
        for (row, cell) in column.iter().enumerate() {
            let (x, y) = layout::cell_center(col, row);
            match cell {
                CellState::Hidden => {}
                CellState::Empty => draw_cell(target, Point::new(x, y), false)?,
                CellState::Filled => draw_cell(target, Point::new(x, y), true)?,
            }
        }
    }

    Ok(())
}

/// Draw into the frame buffer, which cannot fail
pub fn render_face(frame: &mut Frame, model: &FaceModel) {
    match draw_face(frame, model) {
        Ok(()) => {}
        Err(infallible) => match infallible {},
    }
}
