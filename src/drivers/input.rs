// Keypad input from the resistor ladder
//
// One ADC pin, one key at a time (hardware limitation of ladders).
// The driver only samples and decodes; the debounce gate lives in the
// controller because it shares the accepted-press timestamp with the
// idle timer.

use log::trace;

use crate::board::button::{Button, LADDER_THRESHOLDS, decode_ladder, scale_raw};

/// Source of raw 12-bit ladder readings.
pub trait LadderAdc {
    fn read_raw(&mut self) -> u16;
}

pub struct InputDriver<A> {
    adc: A,
    last: Option<Button>,
}

impl<A: LadderAdc> InputDriver<A> {
    pub fn new(adc: A) -> Self {
        Self { adc, last: None }
    }

    /// Sample the ladder once and decode it.
    pub fn poll(&mut self) -> Option<Button> {
        let sample = scale_raw(self.adc.read_raw());
        let button = decode_ladder(sample, LADDER_THRESHOLDS);
        if button != self.last {
            trace!("ladder: sample {} -> {:?}", sample, button);
            self.last = button;
        }
        button
    }
}
