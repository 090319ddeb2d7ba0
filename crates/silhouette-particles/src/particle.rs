//! Particles and the registry that owns them

use crate::config::SimConfig;
use crate::draw::ParticlePose;
use crate::random::RandomSource;
use crate::target::Target;
use glam::{Vec2, Vec3};
use silhouette_core::{ParticleId, Rect};

/// Spin of a particle about its direction of travel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Current angle in radians
    pub angle: f32,
    /// Radians added every frame, fixed at creation
    pub speed: f32,
}

/// A moving particle.
///
/// `location.z` is depth: zero until the particle bounces, then growing every
/// frame until it passes the cull depth.
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: ParticleId,
    pub location: Vec3,
    pub orientation: Orientation,
    pub velocity: Vec3,
    pub size: f32,
}

impl Particle {
    /// Spawn at `origin`, heading for a jittered point inside `target`.
    pub fn new(
        origin: Vec2,
        target: &Target,
        config: &SimConfig,
        rng: &mut impl RandomSource,
    ) -> Self {
        let orientation = Orientation {
            angle: 0.0,
            speed: rng.sample(config.particle_spin),
        };

        let aim = aim_point(target.rect(), config, rng);
        let direction = (aim - origin).try_normalize().unwrap_or_else(|| rng.heading());
        let velocity = direction * rng.sample(config.particle_speed);

        Self {
            id: ParticleId::next(),
            location: origin.extend(0.0),
            orientation,
            velocity: velocity.extend(0.0),
            size: config.particle_size,
        }
    }

    pub fn depth(&self) -> f32 {
        self.location.z
    }

    pub fn has_bounced(&self) -> bool {
        self.location.z != 0.0
    }

    /// Direction of travel in the scene plane, in radians
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }

    /// Advance one frame. Returns the depth speed if the particle bounced.
    pub fn update(
        &mut self,
        target: &Target,
        config: &SimConfig,
        rng: &mut impl RandomSource,
    ) -> Option<f32> {
        self.location += self.velocity;
        self.orientation.angle += self.orientation.speed;

        if self.location.z == 0.0 && target.contains(self.location.truncate()) {
            Some(self.bounce(config, rng))
        } else {
            None
        }
    }

    /// Turn roughly back the way we came, scramble the planar speed and
    /// start moving along depth.
    fn bounce(&mut self, config: &SimConfig, rng: &mut impl RandomSource) -> f32 {
        let planar = self.velocity.truncate();
        let jitter = rng.sample(config.bounce_angle_jitter);
        let heading = self.heading() - std::f32::consts::PI + jitter;
        let turned = Vec2::from_angle(heading) * planar.length();

        let scale = Vec2::new(
            rng.sample(config.bounce_scale),
            rng.sample(config.bounce_scale),
        );
        let depth_speed = rng.sample(config.bounce_depth_speed);
        self.velocity = (turned * scale).extend(depth_speed);
        depth_speed
    }
}

/// Jittered aim point inside `rect`.
///
/// The jitter scales the sum of the bounds, so its magnitude grows with
/// distance from the origin rather than with the rectangle's size.
fn aim_point(rect: &Rect, config: &SimConfig, rng: &mut impl RandomSource) -> Vec2 {
    Vec2::new(
        (rect.x0() + rect.x1()) * (0.5 + rng.sample(config.aim_jitter)),
        (rect.y0() + rect.y1()) * (0.5 + rng.sample(config.aim_jitter)),
    )
}

/// What happened to particles during one `update_all`
#[derive(Debug, Default)]
pub struct ParticleUpdate {
    /// Particles that bounced this frame, with their new depth speed
    pub bounced: Vec<(ParticleId, f32)>,
    pub culled: Vec<ParticleId>,
}

/// Owns every live particle.
#[derive(Debug, Default)]
pub struct ParticleRegistry {
    particles: Vec<Particle>,
}

impl ParticleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a particle at `origin` aimed at `target` and return it.
    pub fn spawn(
        &mut self,
        origin: Vec2,
        target: &Target,
        config: &SimConfig,
        rng: &mut impl RandomSource,
    ) -> &Particle {
        let particle = Particle::new(origin, target, config, rng);
        tracing::trace!(id = %particle.id, x = origin.x, y = origin.y, "particle spawned");
        let index = self.particles.len();
        self.particles.push(particle);
        &self.particles[index]
    }

    /// Move every particle, bounce the ones entering the target, then cull
    /// the ones past the cull depth.
    pub fn update_all(
        &mut self,
        target: &Target,
        config: &SimConfig,
        rng: &mut impl RandomSource,
    ) -> ParticleUpdate {
        let mut update = ParticleUpdate::default();

        for particle in &mut self.particles {
            if let Some(depth_speed) = particle.update(target, config, rng) {
                tracing::trace!(id = %particle.id, depth_speed, "particle bounced");
                update.bounced.push((particle.id, depth_speed));
            }
        }

        self.particles.retain(|p| {
            if p.depth() > config.cull_depth {
                tracing::trace!(id = %p.id, "particle culled");
                update.culled.push(p.id);
                false
            } else {
                true
            }
        });

        update
    }

    /// Pose of every live particle, for triangle glyphs
    pub fn draw_all(&self) -> Vec<ParticlePose> {
        self.particles.iter().map(ParticlePose::from_particle).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRng, SimRng};

    fn small_target() -> Target {
        Target::new(Rect::from_corners(10.0, 10.0, 20.0, 20.0).unwrap(), 0.2)
    }

    fn particle_at(location: Vec3, velocity: Vec3) -> Particle {
        Particle {
            id: ParticleId::next(),
            location,
            orientation: Orientation {
                angle: 0.0,
                speed: 0.05,
            },
            velocity,
            size: 4.0,
        }
    }

    #[test]
    fn spawn_speed_within_range() {
        let config = SimConfig::default();
        let target = Target::from_config(&config).unwrap();
        let mut rng = SimRng::seeded(11);
        for i in 0..500 {
            let origin = Vec2::new((i * 37 % 1600) as f32, (i * 91 % 900) as f32);
            let p = Particle::new(origin, &target, &config, &mut rng);
            let speed = p.velocity.truncate().length();
            assert!(speed >= 1.0 - 1e-4 && speed <= 3.0 + 1e-4, "speed {speed}");
            assert_eq!(p.depth(), 0.0);
            assert_eq!(p.velocity.z, 0.0);
            assert!(config.particle_spin.contains(p.orientation.speed));
        }
    }

    #[test]
    fn aims_at_jittered_midpoint() {
        let config = SimConfig::default();
        let target = small_target();
        // Midpoint draws: spin, zero jitter on both axes, speed 2
        let mut rng = ScriptedRng::midpoint();
        let p = Particle::new(Vec2::new(0.0, 0.0), &target, &config, &mut rng);
        let dir = p.velocity.truncate().normalize();
        assert!((dir - Vec2::new(1.0, 1.0).normalize()).length() < 1e-5);
        assert!((p.velocity.truncate().length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn aim_jitter_scales_bound_sum() {
        let config = SimConfig::default();
        let rect = Rect::from_corners(10.0, 10.0, 20.0, 20.0).unwrap();
        // Upper end of the jitter range: 30 * 0.55
        let mut rng = ScriptedRng::new(vec![0.999_999]);
        let aim = aim_point(&rect, &config, &mut rng);
        assert!((aim.x - 16.5).abs() < 1e-3);
        assert!((aim.y - 16.5).abs() < 1e-3);
    }

    #[test]
    fn degenerate_aim_still_moves() {
        let config = SimConfig::default();
        let target = small_target();
        // Zero jitter puts the aim exactly on the origin (15, 15)
        let mut rng = ScriptedRng::midpoint();
        let p = Particle::new(Vec2::new(15.0, 15.0), &target, &config, &mut rng);
        let speed = p.velocity.truncate().length();
        assert!((1.0..=3.0).contains(&speed));
    }

    #[test]
    fn bounce_reverses_and_lifts() {
        let config = SimConfig::default();
        let target = small_target();
        let mut p = particle_at(Vec3::new(8.0, 15.0, 0.0), Vec3::new(4.0, 0.0, 0.0));
        // angle jitter 0, both scales at the low end (-0.25), depth speed at 12.5
        let mut rng = ScriptedRng::new(vec![0.5, 0.0, 0.0, 0.5]);

        let depth_speed = p.update(&target, &config, &mut rng).expect("should bounce");
        assert_eq!(depth_speed, 12.5);
        // heading pi after reversal, then scaled by -0.25: back to +x at 1 unit
        assert!((p.velocity.x - 1.0).abs() < 1e-5);
        assert!(p.velocity.y.abs() < 1e-5);
        assert_eq!(p.velocity.z, 12.5);
        assert_eq!(p.depth(), 0.0);

        p.update(&target, &config, &mut rng);
        assert_eq!(p.depth(), 12.5);
        assert!(p.has_bounced());
    }

    #[test]
    fn no_second_bounce_after_lift() {
        let config = SimConfig::default();
        let target = small_target();
        let mut p = particle_at(Vec3::new(15.0, 15.0, 30.0), Vec3::new(0.0, 0.0, 5.0));
        let mut rng = SimRng::seeded(1);
        for _ in 0..20 {
            assert!(p.update(&target, &config, &mut rng).is_none());
            assert_eq!(p.velocity, Vec3::new(0.0, 0.0, 5.0));
        }
    }

    #[test]
    fn edge_contact_is_not_a_collision() {
        let config = SimConfig::default();
        let target = small_target();
        let mut p = particle_at(Vec3::new(9.0, 15.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let mut rng = SimRng::seeded(2);
        assert!(p.update(&target, &config, &mut rng).is_none());
        assert_eq!(p.location.x, 10.0);
    }

    #[test]
    fn orientation_advances() {
        let config = SimConfig::default();
        let target = small_target();
        let mut p = particle_at(Vec3::new(100.0, 100.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let mut rng = SimRng::seeded(3);
        for _ in 0..4 {
            p.update(&target, &config, &mut rng);
        }
        assert!((p.orientation.angle - 0.2).abs() < 1e-5);
    }

    #[test]
    fn culls_past_depth_without_skipping_neighbours() {
        let config = SimConfig::default();
        let target = small_target();
        let mut registry = ParticleRegistry::new();
        // Alternate particles about to be culled with ones that stay
        for i in 0..6 {
            let depth = if i % 2 == 0 { 499.0 } else { 100.0 };
            registry.push(particle_at(
                Vec3::new(500.0, 500.0, depth),
                Vec3::new(0.0, 0.0, 2.0),
            ));
        }
        let mut rng = SimRng::seeded(4);
        let update = registry.update_all(&target, &config, &mut rng);
        assert_eq!(update.culled.len(), 3);
        assert_eq!(registry.len(), 3);
        assert!(registry.iter().all(|p| p.depth() == 102.0));
    }

    #[test]
    fn culled_within_expected_ticks_after_bounce() {
        let config = SimConfig::default();
        let target = small_target();
        let mut registry = ParticleRegistry::new();
        registry.push(particle_at(Vec3::new(5.0, 15.0, 0.0), Vec3::new(6.0, 0.0, 0.0)));
        // Depth speed 5 + 0.15 * 15 = 7.25, which does not divide 500
        let mut rng = ScriptedRng::new(vec![0.15]);

        let first = registry.update_all(&target, &config, &mut rng);
        let (_, v) = first.bounced[0];
        assert!((v - 7.25).abs() < 1e-4);
        let deadline = (config.cull_depth / v).ceil() as u32;

        for tick in 1..=deadline {
            let update = registry.update_all(&target, &config, &mut rng);
            assert!(update.bounced.is_empty());
            if !update.culled.is_empty() {
                assert_eq!(tick, deadline);
                assert!(registry.is_empty());
                return;
            }
        }
        panic!("particle still alive {deadline} ticks after bouncing");
    }

    #[test]
    fn draw_all_reports_every_pose() {
        let config = SimConfig::default();
        let target = small_target();
        let mut registry = ParticleRegistry::new();
        let mut rng = SimRng::seeded(6);
        let id = registry
            .spawn(Vec2::new(300.0, 40.0), &target, &config, &mut rng)
            .id;
        registry.push(particle_at(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 1.0, 0.0)));

        let poses = registry.draw_all();
        assert_eq!(poses.len(), 2);
        assert_eq!(poses[0].id, id);
        assert_eq!(poses[0].position, Vec3::new(300.0, 40.0, 0.0));
        assert_eq!(poses[1].position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(registry.len(), 2);
    }
}
