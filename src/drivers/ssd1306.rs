// SSD1306 128x64 OLED driver over I2C (board-independent)
//
// Keeps a 1 KB page-major framebuffer in RAM (one byte = 8 vertical
// pixels, 8 pages of 128 columns) and pushes it in one I2C write.
// Byte 0 of the buffer is the data-stream control byte so flush()
// never copies.

use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
};
use embedded_hal::i2c::I2c;

pub const WIDTH: u32 = 128;
pub const HEIGHT: u32 = 64;
pub const PAGES: usize = (HEIGHT / 8) as usize;

pub const BUF_SIZE: usize = WIDTH as usize * PAGES; // 1024B

pub const DEFAULT_ADDRESS: u8 = 0x3C;

// control bytes
const CONTROL_CMD: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

// SSD1306 commands
mod cmd {
    pub const MEMORY_MODE: u8 = 0x20;
    pub const COLUMN_ADDR: u8 = 0x21;
    pub const PAGE_ADDR: u8 = 0x22;
    pub const START_LINE: u8 = 0x40;
    pub const CONTRAST: u8 = 0x81;
    pub const CHARGE_PUMP: u8 = 0x8D;
    pub const SEG_REMAP: u8 = 0xA1;
    pub const RESUME_RAM: u8 = 0xA4;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const MULTIPLEX: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const DISPLAY_OFFSET: u8 = 0xD3;
    pub const CLOCK_DIV: u8 = 0xD5;
    pub const PRECHARGE: u8 = 0xD9;
    pub const COM_PINS: u8 = 0xDA;
    pub const VCOM_DETECT: u8 = 0xDB;
}

// 128x64 panel, internal charge pump, horizontal addressing
const INIT_SEQUENCE: &[u8] = &[
    CONTROL_CMD,
    cmd::DISPLAY_OFF,
    cmd::CLOCK_DIV,
    0x80,
    cmd::MULTIPLEX,
    (HEIGHT - 1) as u8,
    cmd::DISPLAY_OFFSET,
    0x00,
    cmd::START_LINE,
    cmd::CHARGE_PUMP,
    0x14,
    cmd::MEMORY_MODE,
    0x00,
    cmd::SEG_REMAP,
    cmd::COM_SCAN_DEC,
    cmd::COM_PINS,
    0x12,
    cmd::CONTRAST,
    0xCF,
    cmd::PRECHARGE,
    0xF1,
    cmd::VCOM_DETECT,
    0x40,
    cmd::RESUME_RAM,
    cmd::NORMAL_DISPLAY,
    cmd::DISPLAY_ON,
];

// full-screen window for the next data stream
const WINDOW_SEQUENCE: &[u8] = &[
    CONTROL_CMD,
    cmd::COLUMN_ADDR,
    0,
    (WIDTH - 1) as u8,
    cmd::PAGE_ADDR,
    0,
    (PAGES - 1) as u8,
];

pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    // [CONTROL_DATA, page 0 col 0, page 0 col 1, ...]
    buf: [u8; 1 + BUF_SIZE],
}

impl<I2C: I2c> Ssd1306<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        let mut buf = [0u8; 1 + BUF_SIZE];
        buf[0] = CONTROL_DATA;
        Self { i2c, address, buf }
    }

    pub fn init(&mut self) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, INIT_SEQUENCE)
    }

    /// Push the whole framebuffer to display RAM.
    pub fn flush(&mut self) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, WINDOW_SEQUENCE)?;
        self.i2c.write(self.address, &self.buf)
    }

    pub fn is_on(&self, x: u32, y: u32) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        let (idx, bit) = Self::locate(x, y);
        self.buf[idx] & (1 << bit) != 0
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    #[inline]
    fn locate(x: u32, y: u32) -> (usize, u8) {
        let idx = 1 + x as usize + (y as usize / 8) * WIDTH as usize;
        (idx, (y % 8) as u8)
    }
}

impl<I2C> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl<I2C: I2c> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x < 0 || coord.y < 0 {
                continue;
            }
            let (x, y) = (coord.x as u32, coord.y as u32);
            if x >= WIDTH || y >= HEIGHT {
                continue;
            }
            let (idx, bit) = Self::locate(x, y);
            if color.is_on() {
                self.buf[idx] |= 1 << bit;
            } else {
                self.buf[idx] &= !(1 << bit);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        self.buf[1..].fill(fill);
        Ok(())
    }
}
