// Edit/run state machine around the automaton
//
// One Controller owns the whole simulation context: both grid buffers,
// the cursor, the mode and every timestamp. The main loop feeds it the
// decoded key and the uptime once per tick; nothing else mutates it.
//
// Per tick, in this order:
//   1. debounce gate; an accepted key resets the idle timer and acts
//   2. idle promotion Editing -> Running
//   3. report whether a generation is due
// Blink is evaluated separately at render time, after any step delay.

use log::{debug, info};

use super::engine::Life;
use super::grid::{Grid, Pos};
use crate::board::Button;
use crate::config::{StepPolicy, Timing};
use crate::kernel::elapsed_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Running,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Editing => "Editing",
            Mode::Running => "Running",
        }
    }
}

/// What one call to [`Controller::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Key that passed the debounce gate and was applied.
    pub accepted: Option<Button>,
    /// Set when the mode changed during this tick.
    pub transition: Option<(Mode, Mode)>,
    /// The caller should run [`Controller::advance`] before drawing.
    pub step_due: bool,
}

pub struct Controller {
    life: Life,
    cursor: Pos,
    mode: Mode,
    timing: Timing,
    last_press: u32,
    last_input: u32,
    last_blink: u32,
    last_step: u32,
    cursor_visible: bool,
}

impl Controller {
    pub fn new(timing: Timing, now: u32) -> Self {
        Self {
            life: Life::new(),
            cursor: Pos::ORIGIN,
            mode: Mode::Editing,
            timing,
            last_press: now,
            last_input: now,
            last_blink: now,
            last_step: now,
            cursor_visible: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.life.grid()
    }

    pub fn life(&self) -> &Life {
        &self.life
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn tick(&mut self, now: u32, button: Option<Button>) -> Tick {
        let before = self.mode;

        let accepted = self.debounce(now, button);
        if let Some(btn) = accepted {
            self.last_input = now;
            self.apply(btn, now);
        }

        if self.mode == Mode::Editing
            && elapsed_ms(now, self.last_input) > self.timing.idle_to_run_ms
        {
            self.set_mode(Mode::Running, now);
        }

        let step_due = match (self.mode, self.timing.step_policy) {
            (Mode::Editing, _) => false,
            (Mode::Running, StepPolicy::Blocking) => true,
            (Mode::Running, StepPolicy::Deferred) => {
                elapsed_ms(now, self.last_step) >= self.timing.step_ms
            }
        };

        let transition = (self.mode != before).then_some((before, self.mode));
        Tick {
            accepted,
            transition,
            step_due,
        }
    }

    /// Run one generation and re-arm the step timer.
    pub fn advance(&mut self, now: u32) {
        self.life.step();
        self.last_step = now;
        debug!(
            "generation {}: {} alive",
            self.life.generation(),
            self.life.grid().population()
        );
    }

    /// Toggle cursor visibility once the blink interval has passed.
    pub fn update_blink(&mut self, now: u32) -> bool {
        if elapsed_ms(now, self.last_blink) > self.timing.blink_ms {
            self.last_blink = now;
            self.cursor_visible = !self.cursor_visible;
        }
        self.cursor_visible
    }

    // presses inside the window are dropped, not queued
    fn debounce(&mut self, now: u32, button: Option<Button>) -> Option<Button> {
        let btn = button?;
        if elapsed_ms(now, self.last_press) > self.timing.debounce_ms {
            self.last_press = now;
            Some(btn)
        } else {
            None
        }
    }

    fn apply(&mut self, btn: Button, now: u32) {
        match btn.delta() {
            Some((dx, dy)) => {
                self.cursor = self.cursor.offset(dx, dy);
                debug!("key {}: cursor {}", btn, self.cursor);
            }
            None => {
                let alive = self.life.toggle(self.cursor);
                debug!("key {}: cell {} -> {}", btn, self.cursor, alive);
                // editing always interrupts a run
                if self.mode != Mode::Editing {
                    self.set_mode(Mode::Editing, now);
                }
            }
        }
    }

    fn set_mode(&mut self, mode: Mode, now: u32) {
        info!("mode: {} -> {}", self.mode.name(), mode.name());
        self.mode = mode;
        if mode == Mode::Running {
            self.last_step = now;
        }
    }
}
