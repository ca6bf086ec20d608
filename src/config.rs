// Compile-time timing parameters
//
// Nothing here is persisted or read at runtime; the controller takes a
// Timing by value so tests can shrink or stretch the windows.

/// How the running simulation is paced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepPolicy {
    /// Step when `step_ms` has passed since the previous step; input is
    /// still polled in between.
    #[default]
    Deferred,
    /// Every running tick is a step; the main loop blocks `step_ms`
    /// before advancing and samples no input meanwhile.
    Blocking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Minimum gap between two accepted presses (strictly greater).
    pub debounce_ms: u32,
    /// Inactivity while editing before the simulation starts (strictly greater).
    pub idle_to_run_ms: u32,
    /// Cursor blink half-period (strictly greater).
    pub blink_ms: u32,
    /// Time between generations while running.
    pub step_ms: u32,
    pub step_policy: StepPolicy,
}

impl Timing {
    pub const DEFAULT: Timing = Timing {
        debounce_ms: 50,
        idle_to_run_ms: 5000,
        blink_ms: 50,
        step_ms: 500,
        step_policy: StepPolicy::Deferred,
    };

    pub const fn with_step_policy(mut self, step_policy: StepPolicy) -> Self {
        self.step_policy = step_policy;
        self
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
