//! Animation sequencing for the active view.
//!
//! Every element of a diagram carries an entrance delay in milliseconds. The
//! clock counts ticks since the view was entered and answers whether a given
//! delay has elapsed, plus the phase of the looping effects (pulsing status
//! dots, travelling connection dots, the rotating header icon). Everything is
//! arithmetic on the tick count, so rendering stays deterministic in tests.

/// Interval between `Message::Tick`s.
pub const TICK_MS: u64 = 50;

/// Half-period of the provisioning pulse.
pub const PULSE_MS: u64 = 500;

/// Travel time of the dot along an animated connection.
pub const CONNECTION_CYCLE_MS: u64 = 2_000;

/// Full rotation of the header icon.
pub const SPINNER_ROTATION_MS: u64 = 20_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealClock {
    ticks: u64,
    enabled: bool,
    finished: bool,
}

impl Default for RevealClock {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RevealClock {
    pub fn new(enabled: bool) -> Self {
        Self {
            ticks: 0,
            enabled,
            finished: false,
        }
    }

    pub fn tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    /// Start the entrance sequence over (a different view was selected).
    pub fn restart(&mut self) {
        self.ticks = 0;
        self.finished = false;
    }

    /// Reveal everything immediately.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.finish();
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.ticks.saturating_mul(TICK_MS)
    }

    /// Whether an element with this entrance delay is visible yet.
    pub fn is_revealed(&self, delay_ms: u32) -> bool {
        !self.enabled || self.finished || self.elapsed_ms() >= u64::from(delay_ms)
    }

    /// On/off phase of pulsing indicators. Always on when animations are off.
    pub fn pulse_on(&self) -> bool {
        !self.enabled || (self.elapsed_ms() / PULSE_MS) % 2 == 0
    }

    /// Position of the travelling dot along a connection `span` cells long,
    /// or `None` when animations are off.
    pub fn arrow_phase(&self, cycle_ms: u64, span: usize) -> Option<usize> {
        if !self.enabled || span == 0 || cycle_ms == 0 {
            return None;
        }
        let progress = self.elapsed_ms() % cycle_ms;
        Some((progress as usize * span) / cycle_ms as usize)
    }

    /// Frame index of a `frames`-step rotation completing every 20 seconds.
    pub fn spinner_frame(&self, frames: usize) -> usize {
        if !self.enabled || frames == 0 {
            return 0;
        }
        let progress = self.elapsed_ms() % SPINNER_ROTATION_MS;
        (progress as usize * frames) / SPINNER_ROTATION_MS as usize
    }
}
