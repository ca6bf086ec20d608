// Game of Life core: toroidal grid, double-buffered engine and the
// edit/run controller. Hardware-free; everything here runs on the host.

pub mod controller;
pub mod engine;
pub mod grid;

pub use controller::{Controller, Mode, Tick};
pub use engine::Life;
pub use grid::{GRID_HEIGHT, GRID_WIDTH, Grid, Pos};
