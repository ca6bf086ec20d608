// Double-buffered B3/S23 automaton
//
// step() fills `next` from `current` in full, then swaps the buffers.
// Only `current` is ever read from outside.

use core::mem;

use super::grid::{Grid, Pos};

/// Conway rule: survive on 2 or 3, birth on exactly 3.
#[inline]
pub const fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
}

pub struct Life {
    current: Grid,
    next: Grid,
    generation: u32,
}

impl Life {
    pub const fn new() -> Self {
        Self {
            current: Grid::new(),
            next: Grid::new(),
            generation: 0,
        }
    }

    pub fn with_grid(grid: Grid) -> Self {
        Self {
            current: grid,
            next: Grid::new(),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn step(&mut self) {
        for pos in Grid::positions() {
            let alive = self.current.get(pos);
            let n = self.current.live_neighbors(pos);
            self.next.set(pos, next_state(alive, n));
        }
        mem::swap(&mut self.current, &mut self.next);
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn toggle(&mut self, pos: Pos) -> bool {
        self.current.toggle(pos)
    }
}

impl Default for Life {
    fn default() -> Self {
        Self::new()
    }
}
