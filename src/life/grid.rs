// Fixed 16x8 toroidal cell field
//
// Row-major storage. Every coordinate that leaves this module has been
// through wrap(), so callers never clamp or bounds-check.

use core::fmt;

pub const GRID_WIDTH: usize = 16;
pub const GRID_HEIGHT: usize = 8;

/// Wrap `coord + delta` into `0..len`.
#[inline]
pub fn wrap(coord: usize, delta: isize, len: usize) -> usize {
    (coord as isize + delta).rem_euclid(len as isize) as usize
}

/// A cell coordinate, always inside the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const ORIGIN: Pos = Pos { x: 0, y: 0 };

    /// Build a position, wrapping out-of-range components.
    pub const fn new(x: usize, y: usize) -> Self {
        Self {
            x: x % GRID_WIDTH,
            y: y % GRID_HEIGHT,
        }
    }

    pub fn offset(self, dx: isize, dy: isize) -> Self {
        Self {
            x: wrap(self.x, dx, GRID_WIDTH),
            y: wrap(self.y, dy, GRID_HEIGHT),
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[bool; GRID_WIDTH]; GRID_HEIGHT],
}

impl Grid {
    pub const fn new() -> Self {
        Self {
            cells: [[false; GRID_WIDTH]; GRID_HEIGHT],
        }
    }

    /// Parse one string per row, `#` live and `.` dead.
    ///
    /// Returns `None` if a row has the wrong width or any other byte.
    pub fn from_rows(rows: [&str; GRID_HEIGHT]) -> Option<Self> {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let bytes = row.as_bytes();
            if bytes.len() != GRID_WIDTH {
                return None;
            }
            for (x, &b) in bytes.iter().enumerate() {
                grid.cells[y][x] = match b {
                    b'#' => true,
                    b'.' => false,
                    _ => return None,
                };
            }
        }
        Some(grid)
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        self.cells[pos.y][pos.x]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, alive: bool) {
        self.cells[pos.y][pos.x] = alive;
    }

    /// Flip the cell at `pos`, returning its new state.
    pub fn toggle(&mut self, pos: Pos) -> bool {
        let cell = &mut self.cells[pos.y][pos.x];
        *cell = !*cell;
        *cell
    }

    pub fn clear(&mut self) {
        self.cells = [[false; GRID_WIDTH]; GRID_HEIGHT];
    }

    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }

    /// Live cells among the 8 toroidal neighbours of `pos`.
    pub fn live_neighbors(&self, pos: Pos) -> u8 {
        let mut count = 0u8;
        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.get(pos.offset(dx, dy)) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Every position in row-major order.
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..GRID_HEIGHT).flat_map(|y| (0..GRID_WIDTH).map(move |x| Pos { x, y }))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

// one row per line, same alphabet as from_rows
impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_both_edges() {
        assert_eq!(wrap(0, -1, GRID_WIDTH), GRID_WIDTH - 1);
        assert_eq!(wrap(GRID_WIDTH - 1, 1, GRID_WIDTH), 0);
        assert_eq!(wrap(3, 1, GRID_HEIGHT), 4);
        assert_eq!(wrap(0, 0, GRID_HEIGHT), 0);
    }

    #[test]
    fn pos_new_wraps_out_of_range_components() {
        assert_eq!(Pos::new(GRID_WIDTH, GRID_HEIGHT + 2), Pos { x: 0, y: 2 });
    }

    #[test]
    fn toggle_flips_and_reports_new_state() {
        let mut grid = Grid::new();
        let p = Pos::new(5, 3);
        assert!(grid.toggle(p));
        assert!(grid.get(p));
        assert!(!grid.toggle(p));
        assert!(!grid.get(p));
    }

    #[test]
    fn corner_cells_are_diagonal_neighbours() {
        let mut grid = Grid::new();
        grid.set(Pos::new(GRID_WIDTH - 1, GRID_HEIGHT - 1), true);
        assert_eq!(grid.live_neighbors(Pos::ORIGIN), 1);
    }

    #[test]
    fn neighbour_count_excludes_self() {
        let mut grid = Grid::new();
        let p = Pos::new(4, 4);
        grid.set(p, true);
        assert_eq!(grid.live_neighbors(p), 0);
        grid.set(p.offset(1, 0), true);
        grid.set(p.offset(0, -1), true);
        assert_eq!(grid.live_neighbors(p), 2);
    }

    #[test]
    fn full_grid_gives_eight_neighbours_everywhere() {
        let rows = ["################"; GRID_HEIGHT];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.population(), GRID_WIDTH * GRID_HEIGHT);
        assert!(Grid::positions().all(|p| grid.live_neighbors(p) == 8));
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        let mut rows = ["................"; GRID_HEIGHT];
        rows[2] = "......";
        assert!(Grid::from_rows(rows).is_none());
        rows[2] = "....x...........";
        assert!(Grid::from_rows(rows).is_none());
    }

    #[test]
    fn positions_cover_every_cell_once() {
        assert_eq!(Grid::positions().count(), GRID_WIDTH * GRID_HEIGHT);
        assert_eq!(Grid::positions().next(), Some(Pos::ORIGIN));
        assert_eq!(
            Grid::positions().last(),
            Some(Pos::new(GRID_WIDTH - 1, GRID_HEIGHT - 1))
        );
    }
}
