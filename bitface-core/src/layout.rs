//! Cell-grid layout math for the 144x168 panel
//!
//! The grid hugs the bottom of the panel; the band above it holds the
//! month, date and hobbit-time text. Cell (0,0) is the upper-left of the
//! grid, (5,3) the lower-right.

/// Panel width in pixels
pub const FACE_WIDTH: u32 = 144;

/// Panel height in pixels
pub const FACE_HEIGHT: u32 = 168;

/// Bytes per packed 1-bpp panel line
pub const LINE_BYTES: usize = FACE_WIDTH as usize / 8;

/// Radius of one cell circle
pub const CIRCLE_RADIUS: u32 = 10;

/// Ring line thickness for unfilled cells
pub const CIRCLE_LINE_THICKNESS: u32 = 2;

/// Padding pixels on each side of a circle
pub const CIRCLE_PADDING: u32 = 2;

/// One cell is the square that contains the circle
pub const CELL_SIZE: u32 = 2 * (CIRCLE_RADIUS + CIRCLE_PADDING);

/// Grid columns, one per decimal digit of HH:MM:SS
pub const GRID_COLS: usize = 6;

/// Grid rows, one per binary digit
pub const GRID_ROWS: usize = 4;

/// Height of the text band above the grid
pub const TOP_PADDING: u32 = FACE_HEIGHT - GRID_ROWS as u32 * CELL_SIZE;

/// Center point of a cell, in panel pixels
pub const fn cell_center(col: usize, row: usize) -> (i32, i32) {
    let x = CELL_SIZE / 2 + CELL_SIZE * col as u32;
    let y = TOP_PADDING + CELL_SIZE / 2 + CELL_SIZE * row as u32;
    (x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants() {
        assert_eq!(CELL_SIZE, 24);
        assert_eq!(TOP_PADDING, 72);
        assert_eq!(LINE_BYTES, 18);
    }

    #[test]
    fn test_corner_cells() {
        assert_eq!(cell_center(0, 0), (12, 84));
        assert_eq!(cell_center(5, 3), (132, 156));
    }

    #[test]
    fn test_grid_spans_full_width() {
        assert_eq!(GRID_COLS as u32 * CELL_SIZE, FACE_WIDTH);
    }

    #[test]
    fn test_circles_stay_inside_panel() {
        let r = CIRCLE_RADIUS as i32;
        for col in 0..GRID_COLS {
            for row in 0..GRID_ROWS {
                let (x, y) = cell_center(col, row);
                assert!(x - r >= 0 && x + r < FACE_WIDTH as i32);
                assert!(y - r >= TOP_PADDING as i32 && y + r < FACE_HEIGHT as i32);
            }
        }
    }
}
