//! ESP32-C3 Life board support
//!
//! Maps the physical hardware to named subsystems so the rest of the
//! crate never needs GPIO numbers: one ADC pin reading the keypad
//! ladder and an SSD1306 OLED on I2C0. The hardware half only builds
//! with the `firmware` feature; the key definitions build everywhere.

pub mod button;
pub mod pins;

pub use button::{Button, LADDER_THRESHOLDS, decode_ladder};

#[cfg(feature = "firmware")]
use esp_hal::{
    Blocking,
    analog::adc::{Adc, AdcConfig, AdcPin, Attenuation},
    i2c::master::{Config as I2cConfig, I2c},
    peripherals::{ADC1, GPIO1, Peripherals},
    time::Rate,
};

#[cfg(feature = "firmware")]
use crate::drivers::input::LadderAdc;
#[cfg(feature = "firmware")]
use crate::drivers::ssd1306::{DEFAULT_ADDRESS, Ssd1306};

// I2C clock for the OLED; the SSD1306 is rated for fast mode
pub const OLED_I2C_FREQ_KHZ: u32 = 400;

// Type Aliases
#[cfg(feature = "firmware")]
pub type Oled = Ssd1306<I2c<'static, Blocking>>;

// Hardware Bundles
/// Input subsystem hardware: ADC for the keypad ladder.
#[cfg(feature = "firmware")]
pub struct InputHw {
    pub adc: Adc<'static, ADC1<'static>, Blocking>,
    pub ladder: AdcPin<GPIO1<'static>, ADC1<'static>>,
}

/// Display subsystem hardware: OLED on its own I2C bus.
#[cfg(feature = "firmware")]
pub struct DisplayHw {
    pub oled: Oled,
}

/// Complete board hardware, ready for driver initialization.
#[cfg(feature = "firmware")]
pub struct Board {
    pub input: InputHw,
    pub display: DisplayHw,
}

#[cfg(feature = "firmware")]
impl Board {
    pub fn init(p: Peripherals) -> Self {
        let input = Self::init_input(&p);
        let display = Self::init_display(p);
        Board { input, display }
    }

    fn init_input(p: &Peripherals) -> InputHw {
        let mut adc_cfg = AdcConfig::new();

        // 11dB attenuation for the full 0-3.3V ladder swing; raw 12-bit
        let ladder =
            adc_cfg.enable_pin(unsafe { p.GPIO1.clone_unchecked() }, Attenuation::_11dB);

        let adc = Adc::new(unsafe { p.ADC1.clone_unchecked() }, adc_cfg);

        InputHw { adc, ladder }
    }

    fn init_display(p: Peripherals) -> DisplayHw {
        let i2c_cfg = I2cConfig::default().with_frequency(Rate::from_khz(OLED_I2C_FREQ_KHZ));
        let i2c = I2c::new(p.I2C0, i2c_cfg)
            .unwrap()
            .with_sda(p.GPIO8)
            .with_scl(p.GPIO9);

        DisplayHw {
            oled: Ssd1306::new(i2c, DEFAULT_ADDRESS),
        }
    }
}

#[cfg(feature = "firmware")]
impl LadderAdc for InputHw {
    fn read_raw(&mut self) -> u16 {
        // a failed conversion reads as "no key"
        nb::block!(self.adc.read_oneshot(&mut self.ladder)).unwrap_or(0)
    }
}
