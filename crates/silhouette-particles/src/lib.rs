//! Silhouette Particles - spawn scheduling and particle kinematics
//!
//! Particles leave a spawn point, head for a jittered point inside a
//! rectangular target, bounce once on first contact and then drift along a
//! depth axis until culled. Provides:
//! - `SpawnScheduler` - per-frame spawn decisions under CLICK, CURSOR and AUTO modes
//! - `ParticleRegistry` - motion, bounce and culling
//! - `EmitterRegistry` - stationary emitters with their own spawn timers
//! - `Target` - the rectangle particles seek, following the pointer in AUTO mode
//! - `Simulation` - owns all of the above and runs one tick at a time
//! - `DrawList` - read-only draw requests for an external renderer

pub mod config;
pub mod draw;
pub mod emitter;
pub mod particle;
pub mod random;
pub mod scheduler;
pub mod simulation;
pub mod target;

pub use config::{FloatRange, SimConfig};
pub use draw::{DrawList, EmitterMarker, ParticleInstance, ParticlePose};
pub use emitter::{Emitter, EmitterRegistry};
pub use particle::{Orientation, Particle, ParticleRegistry, ParticleUpdate};
pub use random::{RandomSource, SimRng};
pub use scheduler::{PendingSpawns, SpawnDecision, SpawnScheduler};
pub use simulation::{SimStats, Simulation};
pub use target::Target;
