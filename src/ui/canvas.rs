// GlyphSink over any 1-bit embedded-graphics target
//
// Cells are 8x8 pixels, so a 128x64 panel is exactly 16x8 cells.
// Each glyph first blanks its cell, then draws a 5x8 mono character
// one pixel in from the left edge.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_5X8},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use super::render::GlyphSink;

pub const CELL_PX: u32 = 8;

// 5px glyph inside the 8px cell
const GLYPH_INSET_X: i32 = 1;

pub struct GlyphCanvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D> GlyphCanvas<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

/// Pixel bounds of glyph cell (`x`, `y`).
pub fn cell_rect(x: usize, y: usize) -> Rectangle {
    Rectangle::new(
        Point::new((x as u32 * CELL_PX) as i32, (y as u32 * CELL_PX) as i32),
        Size::new(CELL_PX, CELL_PX),
    )
}

impl<D> GlyphSink for GlyphCanvas<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    fn draw_glyph(&mut self, x: usize, y: usize, glyph: char) -> Result<(), Self::Error> {
        let cell = cell_rect(x, y);
        cell.into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(self.target)?;

        let mut utf8 = [0u8; 4];
        let text = glyph.encode_utf8(&mut utf8);
        let origin = cell.top_left + Point::new(GLYPH_INSET_X, 0);
        let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
        Text::with_baseline(text, origin, style, Baseline::Top).draw(self.target)?;
        Ok(())
    }
}
