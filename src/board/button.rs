//! Keypad definitions and ADC decoding
//!
//! All five keys share one resistance ladder on a single ADC pin.
//! Each key pulls the pin into its own voltage band; the bands are
//! tested from the highest floor down and the first match wins.
//! Anything under the lowest floor is "no key".

/// The keys on the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Toggle,
}

impl Button {
    pub const fn name(self) -> &'static str {
        match self {
            Button::MoveUp => "Up",
            Button::MoveDown => "Down",
            Button::MoveLeft => "Left",
            Button::MoveRight => "Right",
            Button::Toggle => "Toggle",
        }
    }

    /// Cursor step for the movement keys, `None` for Toggle.
    pub const fn delta(self) -> Option<(isize, isize)> {
        match self {
            Button::MoveUp => Some((0, -1)),
            Button::MoveDown => Some((0, 1)),
            Button::MoveLeft => Some((-1, 0)),
            Button::MoveRight => Some((1, 0)),
            Button::Toggle => None,
        }
    }
}

impl core::fmt::Display for Button {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ADC Threshold Table
// Each entry: (floor, button), on the 10-bit sample scale (0..=1023).
// Ordered highest floor first; decode_ladder relies on that.
pub const LADDER_THRESHOLDS: &[(u16, Button)] = &[
    (820, Button::Toggle),
    (400, Button::MoveRight),
    (300, Button::MoveLeft),
    (230, Button::MoveDown),
    (190, Button::MoveUp),
];

/// Bits in a raw ESP32-C3 ADC reading.
pub const ADC_RAW_BITS: u32 = 12;
/// Bits in the sample scale the thresholds are written for.
pub const SAMPLE_BITS: u32 = 10;

/// Bring a raw 12-bit reading onto the 10-bit threshold scale.
#[inline]
pub const fn scale_raw(raw: u16) -> u16 {
    raw >> (ADC_RAW_BITS - SAMPLE_BITS)
}

pub fn decode_ladder(sample: u16, thresholds: &[(u16, Button)]) -> Option<Button> {
    thresholds
        .iter()
        .find(|&&(floor, _)| sample >= floor)
        .map(|&(_, button)| button)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(sample: u16) -> Option<Button> {
        decode_ladder(sample, LADDER_THRESHOLDS)
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(decode(0), None);
        assert_eq!(decode(189), None);
        assert_eq!(decode(190), Some(Button::MoveUp));
        assert_eq!(decode(229), Some(Button::MoveUp));
        assert_eq!(decode(230), Some(Button::MoveDown));
        assert_eq!(decode(299), Some(Button::MoveDown));
        assert_eq!(decode(300), Some(Button::MoveLeft));
        assert_eq!(decode(399), Some(Button::MoveLeft));
        assert_eq!(decode(400), Some(Button::MoveRight));
        assert_eq!(decode(819), Some(Button::MoveRight));
        assert_eq!(decode(820), Some(Button::Toggle));
        assert_eq!(decode(1023), Some(Button::Toggle));
    }

    #[test]
    fn every_sample_decodes() {
        // total over the whole u16 domain, saturating at Toggle
        assert_eq!(decode(u16::MAX), Some(Button::Toggle));
    }

    #[test]
    fn table_is_descending() {
        assert!(LADDER_THRESHOLDS.windows(2).all(|w| w[0].0 > w[1].0));
    }

    #[test]
    fn raw_scaling() {
        assert_eq!(scale_raw(0), 0);
        assert_eq!(scale_raw(4095), 1023);
        // 820 on the 10-bit scale starts at raw 3280
        assert_eq!(decode(scale_raw(3279)), Some(Button::MoveRight));
        assert_eq!(decode(scale_raw(3280)), Some(Button::Toggle));
    }

    #[test]
    fn movement_deltas() {
        assert_eq!(Button::MoveUp.delta(), Some((0, -1)));
        assert_eq!(Button::MoveRight.delta(), Some((1, 0)));
        assert_eq!(Button::Toggle.delta(), None);
    }
}
