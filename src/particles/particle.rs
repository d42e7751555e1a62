//! A single backdrop particle

use glam::Vec2;
use rand::Rng;

use crate::color::Rgba;
use crate::consts::*;

/// A drifting point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    /// Circle radius
    pub size: f32,
    /// Fixed at creation
    pub opacity: f32,
}

impl Particle {
    /// Random particle somewhere inside `[0, width) x [0, height)`
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        let pos = Vec2::new(
            wrap(rng.random::<f32>() * width, width),
            wrap(rng.random::<f32>() * height, height),
        );
        let vel = Vec2::new(
            rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
        );
        Self {
            pos,
            vel,
            size: rng.random_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE),
            opacity: rng.random_range(PARTICLE_MIN_OPACITY..PARTICLE_MAX_OPACITY),
        }
    }

    /// Integrate one frame and wrap around the canvas edges
    pub fn update(&mut self, width: f32, height: f32) {
        self.pos += self.vel;
        self.pos.x = wrap(self.pos.x, width);
        self.pos.y = wrap(self.pos.y, height);
    }

    pub fn color(&self) -> Rgba {
        ACCENT.with_alpha(self.opacity)
    }
}

/// Wrap `v` into `[0, extent)`; degenerate extents collapse to 0
#[inline]
pub fn wrap(v: f32, extent: f32) -> f32 {
    if extent.is_nan() || extent <= 0.0 || !v.is_finite() {
        return 0.0;
    }
    let w = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if w >= extent { 0.0 } else { w }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_wrap_is_toroidal() {
        assert_eq!(wrap(50.0, 100.0), 50.0);
        assert!((wrap(100.05, 100.0) - 0.05).abs() < 1e-4);
        assert!((wrap(-0.05, 100.0) - 99.95).abs() < 1e-4);
        assert_eq!(wrap(100.0, 100.0), 0.0);
        assert_eq!(wrap(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_wrap_degenerate_extent() {
        assert_eq!(wrap(5.0, 0.0), 0.0);
        assert_eq!(wrap(5.0, -10.0), 0.0);
        assert_eq!(wrap(f32::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_in_range() {
        let w = wrap(-1e-10, 100.0);
        assert!((0.0..100.0).contains(&w));
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, 320.0, 200.0);
            assert!((0.0..320.0).contains(&p.pos.x));
            assert!((0.0..200.0).contains(&p.pos.y));
            assert!(p.vel.x.abs() <= PARTICLE_MAX_SPEED);
            assert!(p.vel.y.abs() <= PARTICLE_MAX_SPEED);
            assert!((PARTICLE_MIN_SIZE..=PARTICLE_MAX_SIZE).contains(&p.size));
            assert!((PARTICLE_MIN_OPACITY..=PARTICLE_MAX_OPACITY).contains(&p.opacity));
        }
    }

    #[test]
    fn test_update_crosses_right_edge_to_left() {
        let mut p = Particle {
            pos: Vec2::new(99.95, 10.0),
            vel: Vec2::new(0.1, 0.0),
            size: 1.0,
            opacity: 0.3,
        };
        p.update(100.0, 100.0);
        assert!(p.pos.x < 1.0, "expected wrap to left edge, got {}", p.pos.x);
        assert_eq!(p.pos.y, 10.0);
    }

    #[test]
    fn test_update_crosses_top_edge_to_bottom() {
        let mut p = Particle {
            pos: Vec2::new(10.0, 0.02),
            vel: Vec2::new(0.0, -0.1),
            size: 1.0,
            opacity: 0.3,
        };
        p.update(100.0, 80.0);
        assert!(p.pos.y > 79.0 && p.pos.y < 80.0);
    }

    #[test]
    fn test_color_uses_opacity() {
        let p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 1.0,
            opacity: 0.25,
        };
        assert_eq!(p.color().css(), "rgba(45, 212, 191, 0.25)");
    }
}
