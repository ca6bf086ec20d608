// Glyph-cell rendering for the 16x8 life display.
// render decides what goes in each cell; canvas rasterises it onto any
// 1-bit embedded-graphics target.

pub mod canvas;
pub mod render;

pub use canvas::{CELL_PX, GlyphCanvas};
pub use render::{GlyphSink, draw_cursor, draw_frame, draw_grid};
