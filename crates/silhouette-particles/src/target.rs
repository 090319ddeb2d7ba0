//! The rectangle particles aim at and bounce off

use crate::config::SimConfig;
use glam::Vec2;
use silhouette_core::{Rect, Result, SpawnMode};

/// Fixed-size rectangle that drifts toward the pointer in AUTO mode.
#[derive(Debug, Clone)]
pub struct Target {
    rect: Rect,
    /// Width and height, fixed for the target's lifetime
    size: Vec2,
    follow_factor: f32,
}

impl Target {
    /// Target starting at `rect`; its size is taken once from `rect`.
    pub fn new(rect: Rect, follow_factor: f32) -> Self {
        Self {
            rect,
            size: rect.size(),
            follow_factor: follow_factor.clamp(0.0, 1.0),
        }
    }

    /// Target of the configured size, centred in the scene
    pub fn from_config(config: &SimConfig) -> Result<Self> {
        Ok(Self {
            rect: config.initial_target()?,
            size: Vec2::from_array(config.target_size),
            follow_factor: config.follow_factor.clamp(0.0, 1.0),
        })
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Whether a 2D position is strictly inside the footprint
    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }

    /// Move the centre a fixed fraction of the way toward `pointer`.
    /// Only AUTO mode moves the target.
    pub fn update(&mut self, mode: SpawnMode, pointer: Vec2) {
        if mode != SpawnMode::Auto {
            return;
        }
        let center = self.rect.center().lerp(pointer, self.follow_factor);
        // Bounds are rebuilt from the stored size, never measured from the
        // previous bounds. A non-finite centre keeps the old rectangle.
        if let Ok(rect) = Rect::centered(center, self.size) {
            self.rect = rect;
        }
    }

    /// Bounds for an unfilled outline
    pub fn draw(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Target {
        Target::new(Rect::from_corners(0.0, 0.0, 100.0, 220.0).unwrap(), 0.2)
    }

    #[test]
    fn stationary_outside_auto() {
        let mut t = target();
        let before = *t.rect();
        t.update(SpawnMode::Click, Vec2::new(1000.0, 1000.0));
        t.update(SpawnMode::Cursor, Vec2::new(1000.0, 1000.0));
        assert_eq!(*t.rect(), before);
    }

    #[test]
    fn follows_pointer_in_auto() {
        let mut t = target();
        // centre (50, 110) -> pointer (150, 210): 20% of the way
        t.update(SpawnMode::Auto, Vec2::new(150.0, 210.0));
        let c = t.rect().center();
        assert!((c.x - 70.0).abs() < 1e-4);
        assert!((c.y - 130.0).abs() < 1e-4);
        assert!((t.rect().width() - 100.0).abs() < 1e-3);
        assert!((t.rect().height() - 220.0).abs() < 1e-3);
    }

    #[test]
    fn converges_without_inverting() {
        let mut t = target();
        let pointer = Vec2::new(-4000.0, 9000.0);
        for _ in 0..200 {
            t.update(SpawnMode::Auto, pointer);
            let r = t.rect();
            assert!(r.x0() < r.x1());
            assert!(r.y0() < r.y1());
        }
        assert!(t.rect().center().distance(pointer) < 1.0);
    }

    #[test]
    fn size_stays_fixed_over_long_sweep() {
        let config = SimConfig::default();
        let mut t = Target::from_config(&config).unwrap();
        let configured = Vec2::from_array(config.target_size);
        let mut max_dev = 0.0f32;
        for i in 0..200_000u32 {
            let pointer = Vec2::new((i % 1601) as f32, (i * 7 % 901) as f32);
            t.update(SpawnMode::Auto, pointer);
            assert_eq!(t.size(), configured);
            let dev = (t.rect().size() - configured).abs().max_element();
            max_dev = max_dev.max(dev);
        }
        // Only the rounding of a single rebuild, nothing accumulated
        assert!(max_dev < 1e-3, "size deviated by {max_dev}");
    }

    #[test]
    fn new_takes_size_from_rect() {
        let t = target();
        assert_eq!(t.size(), Vec2::new(100.0, 220.0));
    }

    #[test]
    fn non_finite_pointer_keeps_rect() {
        let mut t = target();
        let before = *t.rect();
        t.update(SpawnMode::Auto, Vec2::new(f32::NAN, 0.0));
        assert_eq!(*t.rect(), before);
    }

    #[test]
    fn draw_is_read_only() {
        let t = target();
        assert_eq!(t.draw(), *t.rect());
    }
}
