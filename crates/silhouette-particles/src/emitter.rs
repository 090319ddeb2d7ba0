//! Stationary emitters and their registry

use crate::config::FloatRange;
use crate::random::RandomSource;
use glam::Vec2;

/// A fixed point that releases a particle every few frames.
///
/// The counter fires once it exceeds the threshold; the threshold is redrawn
/// after every fire.
#[derive(Debug, Clone)]
pub struct Emitter {
    location: Vec2,
    spawn_counter: u32,
    next_threshold: u32,
}

impl Emitter {
    pub fn new(location: Vec2, spawn_delay: FloatRange, rng: &mut impl RandomSource) -> Self {
        Self {
            location,
            spawn_counter: 0,
            next_threshold: rng.delay(spawn_delay),
        }
    }

    pub fn location(&self) -> Vec2 {
        self.location
    }

    pub fn spawn_counter(&self) -> u32 {
        self.spawn_counter
    }

    pub fn next_threshold(&self) -> u32 {
        self.next_threshold
    }

    /// Count one frame. Returns the spawn location when the emitter fires.
    pub fn update(
        &mut self,
        spawn_delay: FloatRange,
        rng: &mut impl RandomSource,
    ) -> Option<Vec2> {
        self.spawn_counter += 1;
        if self.spawn_counter > self.next_threshold {
            self.spawn_counter = 0;
            self.next_threshold = rng.delay(spawn_delay);
            Some(self.location)
        } else {
            None
        }
    }
}

/// Owns every emitter placed during the session.
#[derive(Debug)]
pub struct EmitterRegistry {
    emitters: Vec<Emitter>,
    spawn_delay: FloatRange,
}

impl EmitterRegistry {
    pub fn new(spawn_delay: FloatRange) -> Self {
        Self {
            emitters: Vec::new(),
            spawn_delay,
        }
    }

    pub fn spawn_emitter(&mut self, location: Vec2, rng: &mut impl RandomSource) {
        tracing::debug!(x = location.x, y = location.y, "emitter placed");
        self.emitters.push(Emitter::new(location, self.spawn_delay, rng));
    }

    /// Tick every emitter once, handing each fired location to `spawn`
    /// together with the random source.
    pub fn update_all<R, F>(&mut self, rng: &mut R, mut spawn: F) -> usize
    where
        R: RandomSource,
        F: FnMut(Vec2, &mut R),
    {
        let mut fired = 0;
        for emitter in &mut self.emitters {
            if let Some(location) = emitter.update(self.spawn_delay, rng) {
                spawn(location, rng);
                fired += 1;
            }
        }
        fired
    }

    /// Positions of every emitter, for marker glyphs
    pub fn draw_all(&self) -> Vec<Vec2> {
        self.emitters.iter().map(Emitter::location).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Emitter> {
        self.emitters.iter()
    }

    pub fn len(&self) -> usize {
        self.emitters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitters.is_empty()
    }
}
