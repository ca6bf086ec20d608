// Game of Life firmware for the ESP32-C3 with a 16x8 glyph OLED

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod config;
pub mod drivers;
pub mod kernel;
pub mod life;
pub mod ui;
