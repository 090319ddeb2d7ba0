//! Frame clock with fixed-timestep accumulator

/// Counts simulation frames and paces them against wall-clock time.
///
/// The frame index is what the simulation sees; the accumulator is only used
/// by drivers that want to run at a fixed rate in real time.
pub struct FrameClock {
    /// Fixed timestep interval (default: 1/60 second)
    pub fixed_timestep: f64,
    /// Index of the next frame to run
    frame: u64,
    /// Accumulated time for fixed-step consumption
    accumulator: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            fixed_timestep: 1.0 / 60.0,
            frame: 0,
            accumulator: 0.0,
        }
    }
}

impl FrameClock {
    /// Create a new frame clock with default 60Hz timestep
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame clock with a custom rate
    pub fn with_rate(hz: f64) -> Self {
        Self {
            fixed_timestep: 1.0 / hz.max(1.0),
            ..Self::default()
        }
    }

    /// Return the index of the frame about to run and advance the counter.
    pub fn tick(&mut self) -> u64 {
        let frame = self.frame;
        self.frame += 1;
        frame
    }

    /// Number of frames started so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Add elapsed wall-clock seconds to the accumulator.
    pub fn accumulate(&mut self, elapsed: f64) {
        // Clamp to avoid spiral of death (max 250ms frame time)
        self.accumulator += elapsed.clamp(0.0, 0.25);
    }

    /// Returns true if there's enough accumulated time for a frame
    pub fn should_step(&self) -> bool {
        self.accumulator >= self.fixed_timestep
    }

    /// Consume one fixed timestep from the accumulator
    pub fn consume_step(&mut self) {
        self.accumulator -= self.fixed_timestep;
    }
}
