//! Bounded random draws behind an injectable source

use crate::config::FloatRange;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every stochastic decision in the simulation.
///
/// Implementors only provide `next_f32`; the bounded helpers are derived
/// from it so a scripted source in tests controls every draw.
pub trait RandomSource {
    /// Returns a float in [0, 1)
    fn next_f32(&mut self) -> f32;

    /// Returns a float in [min, max)
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    fn sample(&mut self, range: FloatRange) -> f32 {
        self.range(range.min, range.max)
    }

    /// Frame delay drawn from `range` and rounded to the nearest whole
    /// frame, never less than one.
    fn delay(&mut self, range: FloatRange) -> u32 {
        self.sample(range).round().max(1.0) as u32
    }

    /// Unit vector with a uniformly random heading
    fn heading(&mut self) -> Vec2 {
        Vec2::from_angle(self.range(0.0, std::f32::consts::TAU))
    }
}

/// Seedable generator used outside of tests
pub struct SimRng {
    inner: StdRng,
}

impl SimRng {
    /// Deterministic stream for replays and tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Stream seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SimRng {
    fn next_f32(&mut self) -> f32 {
        self.inner.random::<f32>()
    }
}

/// Replays a fixed list of unit draws, cycling when exhausted.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    values: Vec<f32>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(values: Vec<f32>) -> Self {
        assert!(!values.is_empty());
        Self { values, cursor: 0 }
    }

    /// Every draw lands in the middle of its range
    pub(crate) fn midpoint() -> Self {
        Self::new(vec![0.5])
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn next_f32(&mut self) -> f32 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
