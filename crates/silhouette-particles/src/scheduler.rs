//! Per-frame spawn policy.
//!
//! Input signals are latched into a [`PendingSpawns`] queue; once per frame
//! the scheduler turns the queue and the active [`SpawnMode`] into a
//! [`SpawnDecision`] and resets the queue.

use crate::config::FloatRange;
use crate::random::RandomSource;
use glam::Vec2;
use silhouette_core::SpawnMode;
use silhouette_runtime::FrameInput;

/// Requests gathered for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSpawns {
    pub emitter_requested: bool,
    pub particle_requested: bool,
    /// CURSOR mode spawns when the frame index is a multiple of this
    pub next_cursor_interval: u32,
}

impl PendingSpawns {
    /// Empty queue with a freshly drawn cursor interval
    pub fn fresh(spawn_delay: FloatRange, rng: &mut impl RandomSource) -> Self {
        Self {
            emitter_requested: false,
            particle_requested: false,
            next_cursor_interval: rng.delay(spawn_delay),
        }
    }
}

/// Where to create things this frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnDecision {
    pub emitter_at: Option<Vec2>,
    pub particle_at: Option<Vec2>,
}

/// Decide what the queue asks for under `mode`. Pure; does not reset.
pub fn evaluate(
    mode: SpawnMode,
    pending: &PendingSpawns,
    frame: u64,
    pointer: Vec2,
) -> SpawnDecision {
    let emitter_at = pending.emitter_requested.then_some(pointer);
    let particle_at = match mode {
        SpawnMode::Click => pending.particle_requested.then_some(pointer),
        SpawnMode::Cursor => {
            let interval = u64::from(pending.next_cursor_interval.max(1));
            (frame % interval == 0).then_some(pointer)
        }
        // Emitters spawn on their own schedule
        SpawnMode::Auto => None,
    };
    SpawnDecision {
        emitter_at,
        particle_at,
    }
}

/// Holds the active mode and the pending-spawn queue.
#[derive(Debug)]
pub struct SpawnScheduler {
    mode: SpawnMode,
    pending: PendingSpawns,
    spawn_delay: FloatRange,
}

impl SpawnScheduler {
    pub fn new(mode: SpawnMode, spawn_delay: FloatRange, rng: &mut impl RandomSource) -> Self {
        Self {
            mode,
            pending: PendingSpawns::fresh(spawn_delay, rng),
            spawn_delay,
        }
    }

    pub fn mode(&self) -> SpawnMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SpawnMode) {
        self.mode = mode;
    }

    /// Advance to the next mode, returning `(from, to)`
    pub fn toggle_mode(&mut self) -> (SpawnMode, SpawnMode) {
        let from = self.mode;
        self.mode = from.next();
        (from, self.mode)
    }

    pub fn pending(&self) -> &PendingSpawns {
        &self.pending
    }

    /// Record this frame's signals. Clicks only request a particle in
    /// CLICK mode; emitter requests are honoured in every mode.
    pub fn latch(&mut self, input: &FrameInput) {
        if input.place_emitter {
            self.pending.emitter_requested = true;
        }
        if input.click && self.mode == SpawnMode::Click {
            self.pending.particle_requested = true;
        }
    }

    /// Evaluate the queue for this frame and reset it, whatever fired.
    pub fn decide(
        &mut self,
        frame: u64,
        pointer: Vec2,
        rng: &mut impl RandomSource,
    ) -> SpawnDecision {
        let decision = evaluate(self.mode, &self.pending, frame, pointer);
        self.pending = PendingSpawns::fresh(self.spawn_delay, rng);
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRng, SimRng};

    const DELAY: FloatRange = FloatRange::new(2.0, 10.0);
    const POINTER: Vec2 = Vec2::new(15.0, 15.0);

    fn input(frame: u64) -> FrameInput {
        FrameInput::at(frame, POINTER)
    }

    #[test]
    fn click_spawns_once() {
        let mut rng = SimRng::seeded(1);
        let mut scheduler = SpawnScheduler::new(SpawnMode::Click, DELAY, &mut rng);

        scheduler.latch(&input(0).with_click());
        let d = scheduler.decide(0, POINTER, &mut rng);
        assert_eq!(d.particle_at, Some(POINTER));
        assert_eq!(d.emitter_at, None);

        for frame in 1..50 {
            scheduler.latch(&input(frame));
            assert_eq!(scheduler.decide(frame, POINTER, &mut rng).particle_at, None);
        }
    }

    #[test]
    fn clicks_dropped_outside_click_mode() {
        let mut rng = SimRng::seeded(2);
        for mode in [SpawnMode::Cursor, SpawnMode::Auto] {
            let mut scheduler = SpawnScheduler::new(mode, DELAY, &mut rng);
            scheduler.latch(&input(1).with_click());
            assert!(!scheduler.pending().particle_requested);
            scheduler.decide(1, POINTER, &mut rng);
            assert!(!scheduler.pending().particle_requested);
        }
    }

    #[test]
    fn emitter_request_is_mode_independent() {
        let mut rng = SimRng::seeded(3);
        for mode in SpawnMode::ALL {
            let mut scheduler = SpawnScheduler::new(mode, DELAY, &mut rng);
            scheduler.latch(&input(1).with_emitter());
            let d = scheduler.decide(1, POINTER, &mut rng);
            assert_eq!(d.emitter_at, Some(POINTER));
        }
    }

    #[test]
    fn auto_never_spawns_directly() {
        let mut rng = SimRng::seeded(4);
        let mut scheduler = SpawnScheduler::new(SpawnMode::Auto, DELAY, &mut rng);
        for frame in 0..100 {
            scheduler.latch(&input(frame).with_click());
            assert_eq!(scheduler.decide(frame, POINTER, &mut rng).particle_at, None);
        }
    }

    #[test]
    fn cursor_cadence_matches_drawn_interval() {
        let mut rng = SimRng::seeded(5);
        let mut scheduler = SpawnScheduler::new(SpawnMode::Cursor, DELAY, &mut rng);
        let mut expected = 0;
        let mut spawned = 0;
        for frame in 0..2000 {
            let interval = u64::from(scheduler.pending().next_cursor_interval);
            assert!((2..=10).contains(&interval));
            if frame % interval == 0 {
                expected += 1;
            }
            scheduler.latch(&input(frame));
            if scheduler.decide(frame, POINTER, &mut rng).particle_at.is_some() {
                spawned += 1;
            }
        }
        assert_eq!(spawned, expected);
        assert!(spawned > 0);
    }

    #[test]
    fn queue_reset_every_frame() {
        let mut rng = ScriptedRng::new(vec![0.1, 0.9, 0.4]);
        let mut scheduler = SpawnScheduler::new(SpawnMode::Click, DELAY, &mut rng);
        for (frame, signals) in [(0, (true, true)), (1, (false, true)), (2, (true, false))] {
            let mut i = input(frame);
            i.click = signals.0;
            i.place_emitter = signals.1;
            scheduler.latch(&i);
            scheduler.decide(frame, POINTER, &mut rng);
            let pending = scheduler.pending();
            assert!(!pending.emitter_requested);
            assert!(!pending.particle_requested);
        }
    }

    #[test]
    fn evaluate_is_pure() {
        let pending = PendingSpawns {
            emitter_requested: true,
            particle_requested: true,
            next_cursor_interval: 3,
        };
        let a = evaluate(SpawnMode::Cursor, &pending, 9, POINTER);
        let b = evaluate(SpawnMode::Cursor, &pending, 9, POINTER);
        assert_eq!(a, b);
        assert_eq!(a.particle_at, Some(POINTER));
        assert_eq!(evaluate(SpawnMode::Cursor, &pending, 10, POINTER).particle_at, None);
    }

    #[test]
    fn toggle_cycles_modes() {
        let mut rng = SimRng::seeded(6);
        let mut scheduler = SpawnScheduler::new(SpawnMode::Click, DELAY, &mut rng);
        assert_eq!(scheduler.toggle_mode(), (SpawnMode::Click, SpawnMode::Cursor));
        assert_eq!(scheduler.toggle_mode(), (SpawnMode::Cursor, SpawnMode::Auto));
        assert_eq!(scheduler.toggle_mode(), (SpawnMode::Auto, SpawnMode::Click));
    }
}
