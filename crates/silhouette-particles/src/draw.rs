//! Draw requests handed to the renderer

use crate::particle::Particle;
use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use serde::Serialize;
use silhouette_core::{ParticleId, Rect, SpawnMode};

const SQRT_THREE: f32 = 1.732_050_8;

/// Pose of one particle, drawn as a filled triangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticlePose {
    pub id: ParticleId,
    pub position: Vec3,
    /// Direction of travel in the scene plane (rotation about depth)
    pub heading: f32,
    /// Flip about the direction of travel
    pub spin: f32,
    pub size: f32,
}

impl ParticlePose {
    pub fn from_particle(p: &Particle) -> Self {
        Self {
            id: p.id,
            position: p.location,
            heading: p.heading(),
            spin: p.orientation.angle,
            size: p.size,
        }
    }

    /// Glyph vertices in the particle's local frame
    pub fn triangle(&self) -> [Vec2; 3] {
        [
            Vec2::ZERO,
            Vec2::new(self.size, 2.0 * SQRT_THREE),
            Vec2::new(2.0 * self.size, 0.0),
        ]
    }
}

/// Emitter marker, drawn as an unfilled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmitterMarker {
    pub position: Vec2,
    pub radius: f32,
}

/// GPU instance data for one particle.
/// 32 bytes (2 rows of vec4).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ParticleInstance {
    /// World position + size packed into vec4
    pub pos_size: [f32; 4], // xyz = position, w = size
    /// Rotation angles
    pub heading_spin: [f32; 4], // x = heading, y = spin, zw unused
}

impl ParticleInstance {
    pub fn from_pose(pose: &ParticlePose) -> Self {
        Self {
            pos_size: [pose.position.x, pose.position.y, pose.position.z, pose.size],
            heading_spin: [pose.heading, pose.spin, 0.0, 0.0],
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct DrawList {
    pub frame: u64,
    pub mode: SpawnMode,
    /// Target outline
    pub target: Rect,
    pub emitters: Vec<EmitterMarker>,
    pub particles: Vec<ParticlePose>,
}

impl DrawList {
    /// Pack particle poses for instanced drawing
    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.particles.iter().map(ParticleInstance::from_pose).collect()
    }
}
