//! Spatial and common types

use crate::error::{Result, SilhouetteError};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An axis-aligned rectangle with `x0 < x1` and `y0 < y1`.
///
/// Fields are private so the ordering can only be established by the
/// constructors. Moving a rectangle builds a new one rather than editing
/// single edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rect {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
}

impl Rect {
    /// Build a rectangle from its corners. Fails if either axis is empty,
    /// inverted, or not finite.
    pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Result<Self> {
        let finite = x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite();
        if !finite || x0 >= x1 || y0 >= y1 {
            return Err(SilhouetteError::InvalidBounds { x0, y0, x1, y1 });
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Build a rectangle of `size` centred on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Result<Self> {
        let half = size * 0.5;
        Self::from_corners(
            center.x - half.x,
            center.y - half.y,
            center.x + half.x,
            center.y + half.y,
        )
    }

    pub fn x0(&self) -> f32 {
        self.x0
    }

    pub fn y0(&self) -> f32 {
        self.y0
    }

    pub fn x1(&self) -> f32 {
        self.x1
    }

    pub fn y1(&self) -> f32 {
        self.y1
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Strict containment: points on an edge are outside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.x0 && point.x < self.x1 && point.y > self.y0 && point.y < self.y1
    }
}

/// How new particles are created each frame.
///
/// Cycles `Click -> Cursor -> Auto -> Click` on each toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpawnMode {
    /// One particle at the pointer per click
    #[default]
    Click,
    /// Particles stream from the pointer at a jittered cadence
    Cursor,
    /// Particles come only from placed emitters; the target follows the pointer
    Auto,
}

impl SpawnMode {
    pub const ALL: [SpawnMode; 3] = [SpawnMode::Click, SpawnMode::Cursor, SpawnMode::Auto];

    /// The mode a toggle advances to
    pub fn next(self) -> Self {
        match self {
            SpawnMode::Click => SpawnMode::Cursor,
            SpawnMode::Cursor => SpawnMode::Auto,
            SpawnMode::Auto => SpawnMode::Click,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpawnMode::Click => "CLICK",
            SpawnMode::Cursor => "CURSOR",
            SpawnMode::Auto => "AUTO",
        }
    }
}

impl fmt::Display for SpawnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpawnMode {
    type Err = SilhouetteError;

    fn from_str(s: &str) -> Result<Self> {
        SpawnMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                SilhouetteError::InvalidConfig(format!(
                    "unknown spawn mode '{s}'; expected click, cursor or auto"
                ))
            })
    }
}
