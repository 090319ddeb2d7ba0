//! Events emitted by the simulation

use glam::Vec2;
use silhouette_core::{ParticleId, SpawnMode};

/// Something observable that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    ModeChanged { from: SpawnMode, to: SpawnMode },
    EmitterSpawned { position: Vec2 },
    /// `velocity` is the initial planar velocity, before any bounce
    ParticleSpawned {
        id: ParticleId,
        origin: Vec2,
        velocity: Vec2,
    },
    ParticleBounced { id: ParticleId, depth_speed: f32 },
    ParticleCulled { id: ParticleId },
}

/// Payload-free tag for a [`SimEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimEventKind {
    ModeChanged,
    EmitterSpawned,
    ParticleSpawned,
    ParticleBounced,
    ParticleCulled,
}

impl SimEventKind {
    pub const ALL: [SimEventKind; 5] = [
        SimEventKind::ModeChanged,
        SimEventKind::EmitterSpawned,
        SimEventKind::ParticleSpawned,
        SimEventKind::ParticleBounced,
        SimEventKind::ParticleCulled,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl SimEvent {
    pub fn kind(&self) -> SimEventKind {
        match self {
            SimEvent::ModeChanged { .. } => SimEventKind::ModeChanged,
            SimEvent::EmitterSpawned { .. } => SimEventKind::EmitterSpawned,
            SimEvent::ParticleSpawned { .. } => SimEventKind::ParticleSpawned,
            SimEvent::ParticleBounced { .. } => SimEventKind::ParticleBounced,
            SimEvent::ParticleCulled { .. } => SimEventKind::ParticleCulled,
        }
    }

    /// The particle this event is about, if any
    pub fn particle(&self) -> Option<ParticleId> {
        match self {
            SimEvent::ParticleSpawned { id, .. }
            | SimEvent::ParticleBounced { id, .. }
            | SimEvent::ParticleCulled { id } => Some(*id),
            SimEvent::ModeChanged { .. } | SimEvent::EmitterSpawned { .. } => None,
        }
    }
}

/// Events pushed per kind over the lifetime of a bus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventTotals {
    counts: [u64; 5],
}

impl EventTotals {
    pub(crate) fn record(&mut self, kind: SimEventKind) {
        self.counts[kind.index()] += 1;
    }

    pub fn get(&self, kind: SimEventKind) -> u64 {
        self.counts[kind.index()]
    }
}
