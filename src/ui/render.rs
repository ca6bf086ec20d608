// Grid and cursor drawing in glyph-cell coordinates
//
// The core only decides which glyph goes in which cell; a GlyphSink
// turns that into pixels. Every frame repaints all cells, then the
// cursor overlay.

use crate::life::{Grid, Pos};

pub const LIVE_GLYPH: char = '*';
pub const DEAD_GLYPH: char = ' ';
pub const CURSOR_GLYPH: char = 'X';

/// A display addressed as a grid of character cells.
pub trait GlyphSink {
    type Error;

    /// Replace the contents of cell (`x`, `y`) with `glyph`.
    fn draw_glyph(&mut self, x: usize, y: usize, glyph: char) -> Result<(), Self::Error>;
}

pub fn draw_grid<S: GlyphSink>(sink: &mut S, grid: &Grid) -> Result<(), S::Error> {
    for pos in Grid::positions() {
        let glyph = if grid.get(pos) { LIVE_GLYPH } else { DEAD_GLYPH };
        sink.draw_glyph(pos.x, pos.y, glyph)?;
    }
    Ok(())
}

pub fn draw_cursor<S: GlyphSink>(sink: &mut S, pos: Pos, visible: bool) -> Result<(), S::Error> {
    if visible {
        sink.draw_glyph(pos.x, pos.y, CURSOR_GLYPH)?;
    }
    Ok(())
}

pub fn draw_frame<S: GlyphSink>(
    sink: &mut S,
    grid: &Grid,
    cursor: Pos,
    cursor_visible: bool,
) -> Result<(), S::Error> {
    draw_grid(sink, grid)?;
    draw_cursor(sink, cursor, cursor_visible)
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::life::{GRID_HEIGHT, GRID_WIDTH};

    struct TextScreen {
        cells: [[char; GRID_WIDTH]; GRID_HEIGHT],
        writes: usize,
    }

    impl TextScreen {
        fn new() -> Self {
            Self {
                cells: [['?'; GRID_WIDTH]; GRID_HEIGHT],
                writes: 0,
            }
        }

        fn row(&self, y: usize) -> String {
            self.cells[y].iter().collect()
        }
    }

    impl GlyphSink for TextScreen {
        type Error = Infallible;

        fn draw_glyph(&mut self, x: usize, y: usize, glyph: char) -> Result<(), Self::Error> {
            self.cells[y][x] = glyph;
            self.writes += 1;
            Ok(())
        }
    }

    struct BrokenScreen;

    impl GlyphSink for BrokenScreen {
        type Error = &'static str;

        fn draw_glyph(&mut self, _: usize, _: usize, _: char) -> Result<(), Self::Error> {
            Err("nack")
        }
    }

    #[test]
    fn grid_repaints_every_cell() {
        let mut grid = Grid::new();
        grid.set(Pos::new(0, 0), true);
        grid.set(Pos::new(15, 7), true);

        let mut screen = TextScreen::new();
        draw_grid(&mut screen, &grid).unwrap();

        assert_eq!(screen.writes, GRID_WIDTH * GRID_HEIGHT);
        assert_eq!(screen.row(0), "*               ");
        assert_eq!(screen.row(7), "               *");
    }

    #[test]
    fn cursor_overlays_only_when_visible() {
        let grid = Grid::new();
        let mut screen = TextScreen::new();

        draw_frame(&mut screen, &grid, Pos::new(3, 2), false).unwrap();
        assert_eq!(screen.cells[2][3], DEAD_GLYPH);

        draw_frame(&mut screen, &grid, Pos::new(3, 2), true).unwrap();
        assert_eq!(screen.cells[2][3], CURSOR_GLYPH);
        assert_eq!(screen.writes, 2 * GRID_WIDTH * GRID_HEIGHT + 1);
    }

    #[test]
    fn cursor_hides_live_cell_beneath_it() {
        let mut grid = Grid::new();
        grid.set(Pos::ORIGIN, true);
        let mut screen = TextScreen::new();
        draw_frame(&mut screen, &grid, Pos::ORIGIN, true).unwrap();
        assert_eq!(screen.cells[0][0], CURSOR_GLYPH);
    }

    #[test]
    fn sink_errors_stop_the_frame() {
        assert_eq!(draw_grid(&mut BrokenScreen, &Grid::new()), Err("nack"));
        assert_eq!(draw_cursor(&mut BrokenScreen, Pos::ORIGIN, false), Ok(()));
    }
}
