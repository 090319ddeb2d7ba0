//! The simulation context: owns every collection and runs one tick at a time

use crate::config::SimConfig;
use crate::draw::{DrawList, EmitterMarker};
use crate::emitter::EmitterRegistry;
use crate::particle::ParticleRegistry;
use crate::random::{RandomSource, SimRng};
use crate::scheduler::SpawnScheduler;
use crate::target::Target;
use silhouette_core::{Result, SpawnMode};
use silhouette_runtime::{EventBus, FrameInput, RuntimeSystem, SimEvent};

/// Running totals since the simulation was created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub frames: u64,
    pub emitters_spawned: u64,
    pub particles_spawned: u64,
    pub bounced: u64,
    pub culled: u64,
}

/// Owns the target, both registries, the scheduler and the random source.
///
/// Every mutation happens inside [`Simulation::tick`]; [`Simulation::draw`]
/// is read-only.
pub struct Simulation<R: RandomSource = SimRng> {
    config: SimConfig,
    rng: R,
    target: Target,
    scheduler: SpawnScheduler,
    emitters: EmitterRegistry,
    particles: ParticleRegistry,
    last_frame: u64,
    stats: SimStats,
}

impl<R: RandomSource> Simulation<R> {
    /// Validate `config` and build an empty simulation in CLICK mode.
    pub fn new(config: SimConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let target = Target::from_config(&config)?;
        let scheduler = SpawnScheduler::new(SpawnMode::default(), config.spawn_delay, &mut rng);
        let emitters = EmitterRegistry::new(config.spawn_delay);
        Ok(Self {
            config,
            rng,
            target,
            scheduler,
            emitters,
            particles: ParticleRegistry::new(),
            last_frame: 0,
            stats: SimStats::default(),
        })
    }

    /// Replace the target, e.g. to start from a specific rectangle
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_mode(mut self, mode: SpawnMode) -> Self {
        self.scheduler.set_mode(mode);
        self
    }

    /// Run one frame: mode toggle, target, spawn decision, emitters,
    /// particles. Events describing what happened go to `events`.
    pub fn tick(&mut self, input: &FrameInput, events: &mut EventBus) {
        if input.toggle_mode {
            let (from, to) = self.scheduler.toggle_mode();
            tracing::info!(%from, %to, "spawn mode changed");
            events.push(SimEvent::ModeChanged { from, to });
        }

        self.target.update(self.scheduler.mode(), input.pointer);

        self.scheduler.latch(input);
        let decision = self.scheduler.decide(input.frame, input.pointer, &mut self.rng);

        if let Some(position) = decision.emitter_at {
            self.emitters.spawn_emitter(position, &mut self.rng);
            self.stats.emitters_spawned += 1;
            events.push(SimEvent::EmitterSpawned { position });
        }
        if let Some(origin) = decision.particle_at {
            let particle = self
                .particles
                .spawn(origin, &self.target, &self.config, &mut self.rng);
            events.push(SimEvent::ParticleSpawned {
                id: particle.id,
                origin,
                velocity: particle.velocity.truncate(),
            });
            self.stats.particles_spawned += 1;
        }

        if self.scheduler.mode() == SpawnMode::Auto {
            let particles = &mut self.particles;
            let target = &self.target;
            let config = &self.config;
            let stats = &mut self.stats;
            self.emitters.update_all(&mut self.rng, |origin, rng| {
                let particle = particles.spawn(origin, target, config, rng);
                events.push(SimEvent::ParticleSpawned {
                    id: particle.id,
                    origin,
                    velocity: particle.velocity.truncate(),
                });
                stats.particles_spawned += 1;
            });
        }

        let update = self
            .particles
            .update_all(&self.target, &self.config, &mut self.rng);
        self.stats.bounced += update.bounced.len() as u64;
        self.stats.culled += update.culled.len() as u64;
        for (id, depth_speed) in update.bounced {
            events.push(SimEvent::ParticleBounced { id, depth_speed });
        }
        for id in update.culled {
            events.push(SimEvent::ParticleCulled { id });
        }

        self.last_frame = input.frame;
        self.stats.frames += 1;
    }

    /// Snapshot of everything to draw for the current state
    pub fn draw(&self) -> DrawList {
        DrawList {
            frame: self.last_frame,
            mode: self.scheduler.mode(),
            target: self.target.draw(),
            emitters: self
                .emitters
                .draw_all()
                .into_iter()
                .map(|position| EmitterMarker {
                    position,
                    radius: self.config.emitter_radius,
                })
                .collect(),
            particles: self.particles.draw_all(),
        }
    }

    pub fn mode(&self) -> SpawnMode {
        self.scheduler.mode()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn particles(&self) -> &ParticleRegistry {
        &self.particles
    }

    pub fn emitters(&self) -> &EmitterRegistry {
        &self.emitters
    }

    pub fn scheduler(&self) -> &SpawnScheduler {
        &self.scheduler
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }
}

impl<R: RandomSource> RuntimeSystem for Simulation<R> {
    fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            mode = %self.mode(),
            width = self.config.scene_size[0],
            height = self.config.scene_size[1],
            "simulation ready"
        );
        Ok(())
    }

    fn update(&mut self, input: &FrameInput, events: &mut EventBus) -> Result<()> {
        self.tick(input, events);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        tracing::info!(
            frames = self.stats.frames,
            particles = self.particles.len(),
            emitters = self.emitters.len(),
            "simulation stopped"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "particles"
    }
}
