//! Simulation configuration (parsed from TOML)

use glam::Vec2;
use serde::{Deserialize, Serialize};
use silhouette_core::{Rect, Result, SilhouetteError};
use std::path::Path;

/// Inclusive-exclusive bounds for a random draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Closed containment, for checking draws against their range
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, field: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(SilhouetteError::InvalidConfig(format!(
                "{field}: range {}..{} is inverted or not finite",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Every tunable constant of the simulation.
///
/// All fields are optional in TOML and fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Scene width and height; the target starts centred in it
    pub scene_size: [f32; 2],
    /// Target width and height
    pub target_size: [f32; 2],
    /// Fraction of the distance to the pointer the target covers per frame in AUTO mode
    pub follow_factor: f32,
    /// Particles deeper than this are culled
    pub cull_depth: f32,
    pub particle_size: f32,
    /// Marker radius reported for emitters
    pub emitter_radius: f32,
    /// Frames between emitter spawns and cursor spawns (rounded)
    pub spawn_delay: FloatRange,
    /// Initial speed in units per frame
    pub particle_speed: FloatRange,
    /// Spin in radians per frame
    pub particle_spin: FloatRange,
    /// Relative jitter applied to the aim point on each axis
    pub aim_jitter: FloatRange,
    /// Added to the reversed heading on bounce, in radians
    pub bounce_angle_jitter: FloatRange,
    /// Per-axis velocity factor applied on bounce
    pub bounce_scale: FloatRange,
    /// Depth speed given on bounce
    pub bounce_depth_speed: FloatRange,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            scene_size: [1600.0, 900.0],
            target_size: [100.0, 220.0],
            follow_factor: 0.2,
            cull_depth: 500.0,
            particle_size: 4.0,
            emitter_radius: 10.0,
            spawn_delay: FloatRange::new(2.0, 10.0),
            particle_speed: FloatRange::new(1.0, 3.0),
            particle_spin: FloatRange::new(0.02, 0.08),
            aim_jitter: FloatRange::new(-0.05, 0.05),
            bounce_angle_jitter: FloatRange::new(-0.1, 0.1),
            bounce_scale: FloatRange::new(-0.25, 0.1),
            bounce_depth_speed: FloatRange::new(5.0, 20.0),
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let sizes = [("scene_size", self.scene_size), ("target_size", self.target_size)];
        for (field, [w, h]) in sizes {
            if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
                return Err(SilhouetteError::InvalidConfig(format!(
                    "{field} must be positive, got {w}x{h}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.follow_factor) {
            return Err(SilhouetteError::ValueOutOfRange {
                field: "follow_factor".into(),
                min: 0.0,
                max: 1.0,
                value: self.follow_factor as f64,
            });
        }
        for (field, value) in [
            ("cull_depth", self.cull_depth),
            ("particle_size", self.particle_size),
            ("emitter_radius", self.emitter_radius),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SilhouetteError::InvalidConfig(format!(
                    "{field} must be positive, got {value}"
                )));
            }
        }

        self.spawn_delay.check("spawn_delay")?;
        self.particle_speed.check("particle_speed")?;
        self.particle_spin.check("particle_spin")?;
        self.aim_jitter.check("aim_jitter")?;
        self.bounce_angle_jitter.check("bounce_angle_jitter")?;
        self.bounce_scale.check("bounce_scale")?;
        self.bounce_depth_speed.check("bounce_depth_speed")?;

        if self.spawn_delay.min < 1.0 {
            return Err(SilhouetteError::InvalidConfig(format!(
                "spawn_delay.min must be at least 1 frame, got {}",
                self.spawn_delay.min
            )));
        }
        if self.particle_speed.min < 0.0 {
            return Err(SilhouetteError::InvalidConfig(
                "particle_speed.min must not be negative".into(),
            ));
        }
        // Bounced particles must keep moving along depth or they are never culled
        if self.bounce_depth_speed.min <= 0.0 {
            return Err(SilhouetteError::InvalidConfig(
                "bounce_depth_speed.min must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn scene_center(&self) -> Vec2 {
        Vec2::from_array(self.scene_size) * 0.5
    }

    /// The target's starting rectangle, centred in the scene
    pub fn initial_target(&self) -> Result<Rect> {
        Rect::centered(self.scene_center(), Vec2::from_array(self.target_size))
    }
}
