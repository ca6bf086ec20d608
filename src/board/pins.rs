//! GPIO |     Function    |      Notes
//! -----+-----------------+----------------------------------
//!  1   | ADC1 - Keypad   | Resistance ladder: Up/Down/Left/Right/Toggle
//!  8   | I2C0 SDA        | SSD1306 OLED, 4.7K pullup on module
//!  9   | I2C0 SCL        | SSD1306 OLED

// ----- Keypad (ADC) -----
pub const KEYPAD_ADC: u8 = 1; // GPIO1 - all five keys on one ladder

// ----- OLED (I2C0) -----
pub const OLED_SDA: u8 = 8;
pub const OLED_SCL: u8 = 9;
