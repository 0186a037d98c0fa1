//! 1-bpp frame buffer
//!
//! Packed the way the panel wants its lines: one bit per pixel, MSB
//! first, so the leftmost pixel of a byte is transmitted first. A set
//! bit is a lit (white) pixel.
//!
//! Each line carries a dirty flag that is raised only when a pixel in it
//! actually changes value, so redrawing an identical face costs no SPI
//! traffic.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use bitface_core::layout::{FACE_HEIGHT, FACE_WIDTH, LINE_BYTES};

/// Frame buffer for the 144x168 panel
pub struct Frame {
    lines: [[u8; LINE_BYTES]; FACE_HEIGHT as usize],
    dirty: [bool; FACE_HEIGHT as usize],
}

impl Frame {
    /// Create a cleared (all dark) frame with every line dirty
    pub const fn new() -> Self {
        Self {
            lines: [[0; LINE_BYTES]; FACE_HEIGHT as usize],
            dirty: [true; FACE_HEIGHT as usize],
        }
    }

    /// Set one pixel, marking the line dirty only if the value changed
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= FACE_WIDTH as usize || y >= FACE_HEIGHT as usize {
            return;
        }
        let mask = 0x80 >> (x % 8);
        let byte = &mut self.lines[y][x / 8];
        let was = *byte & mask != 0;
        if was != on {
            *byte ^= mask;
            self.dirty[y] = true;
        }
    }

    /// Read one pixel; out-of-bounds reads are dark
    pub fn get_pixel(&self, x: usize, y: usize) -> bool {
        if x >= FACE_WIDTH as usize || y >= FACE_HEIGHT as usize {
            return false;
        }
        self.lines[y][x / 8] & (0x80 >> (x % 8)) != 0
    }

    /// Whether any line needs sending
    pub fn has_dirty_lines(&self) -> bool {
        self.dirty.iter().any(|&d| d)
    }

    /// Iterate over dirty lines as (row, packed bytes)
    pub fn dirty_lines(&self) -> impl Iterator<Item = (u8, &[u8; LINE_BYTES])> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter(|(y, _)| self.dirty[*y])
            .map(|(y, line)| (y as u8, line))
    }

    /// Clear all dirty flags after a flush
    pub fn mark_clean(&mut self) {
        self.dirty = [false; FACE_HEIGHT as usize];
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(FACE_WIDTH, FACE_HEIGHT)
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as usize, point.y as usize, color.is_on());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{Circle, PrimitiveStyle};

    #[test]
    fn test_set_get_pixel() {
        let mut frame = Frame::new();
        assert!(!frame.get_pixel(0, 0));
        frame.set_pixel(0, 0, true);
        frame.set_pixel(143, 167, true);
        assert!(frame.get_pixel(0, 0));
        assert!(frame.get_pixel(143, 167));
        frame.set_pixel(0, 0, false);
        assert!(!frame.get_pixel(0, 0));
    }

    #[test]
    fn test_packing_is_msb_first() {
        let mut frame = Frame::new();
        frame.mark_clean();
        frame.set_pixel(0, 10, true);
        frame.set_pixel(8, 10, true);
        let (row, line) = frame.dirty_lines().next().unwrap();
        assert_eq!(row, 10);
        assert_eq!(line[0], 0x80);
        assert_eq!(line[1], 0x80);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut frame = Frame::new();
        frame.set_pixel(144, 0, true);
        frame.set_pixel(0, 168, true);
        assert!(!frame.get_pixel(144, 0));
        assert!(!frame.get_pixel(0, 168));
    }

    #[test]
    fn test_dirty_only_on_change() {
        let mut frame = Frame::new();
        assert!(frame.has_dirty_lines());
        frame.mark_clean();
        assert!(!frame.has_dirty_lines());

        // Writing the value already present stays clean
        frame.set_pixel(5, 5, false);
        assert!(!frame.has_dirty_lines());

        frame.set_pixel(5, 5, true);
        assert_eq!(frame.dirty_lines().count(), 1);

        frame.mark_clean();
        frame.set_pixel(5, 5, true);
        assert!(!frame.has_dirty_lines());
    }

    #[test]
    fn test_identical_redraw_is_clean() {
        let mut frame = Frame::new();
        let circle = Circle::with_center(Point::new(40, 100), 21)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On));
        circle.draw(&mut frame).unwrap();
        frame.mark_clean();
        circle.draw(&mut frame).unwrap();
        assert!(!frame.has_dirty_lines());
    }
}
