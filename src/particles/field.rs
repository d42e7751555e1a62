//! Particle field: owns the canvas dimensions and the particle set

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particle::Particle;
use crate::consts::*;
use crate::renderer::Painter;

/// A connecting line between two particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// What one frame drew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
}

/// Line alpha for two particles `distance` apart, `None` past the link range
#[inline]
pub fn link_alpha(distance: f32) -> Option<f32> {
    if distance < LINK_DISTANCE {
        Some((LINK_BASE_ALPHA * (1.0 - distance / LINK_DISTANCE)).max(0.0))
    } else {
        None
    }
}

/// The backdrop's particle set and drawing surface size
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl ParticleField {
    /// Empty field; call `initialize` before the first frame
    pub fn new(seed: u64) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Field with explicit particles (positions are taken as given)
    pub fn from_particles(width: f32, height: f32, particles: Vec<Particle>) -> Self {
        Self {
            width,
            height,
            particles,
            rng: Pcg32::seed_from_u64(0),
        }
    }

    /// Reset dimensions and respawn exactly `count` particles
    pub fn initialize(&mut self, width: f32, height: f32, count: usize) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| Particle::spawn(rng, w, h)).collect();
        log::debug!("Particle field reset: {}x{} with {} particles", w, h, count);
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Move every particle one frame, wrapping at the edges
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.update(w, h);
        }
    }

    /// Every unordered pair closer than the link distance
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |a| {
            (a + 1..ps.len()).filter_map(move |b| {
                let distance = ps[a].pos.distance(ps[b].pos);
                link_alpha(distance).map(|alpha| Link {
                    a,
                    b,
                    distance,
                    alpha,
                })
            })
        })
    }

    /// Clear, draw particles, then draw links
    pub fn draw(&self, painter: &mut impl Painter) -> FrameStats {
        painter.clear(self.width, self.height);
        for p in &self.particles {
            painter.fill_circle(p.pos, p.size, p.color());
        }

        let mut links = 0;
        for link in self.links() {
            painter.stroke_line(
                self.particles[link.a].pos,
                self.particles[link.b].pos,
                LINK_WIDTH,
                ACCENT.with_alpha(link.alpha),
            );
            links += 1;
        }

        FrameStats {
            particles: self.particles.len(),
            links,
        }
    }

    /// One display refresh: integrate, wrap, draw
    pub fn advance_frame(&mut self, painter: &mut impl Painter) -> FrameStats {
        self.step();
        let stats = self.draw(painter);
        log::trace!("Frame: {} particles, {} links", stats.particles, stats.links);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, FrameRecorder};
    use glam::Vec2;
    use proptest::prelude::*;

    fn still(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            size: 1.0,
            opacity: 0.3,
        }
    }

    #[test]
    fn test_initialize_count_and_bounds() {
        let mut field = ParticleField::new(42);
        field.initialize(640.0, 480.0, 30);
        assert_eq!(field.len(), 30);
        for p in field.particles() {
            assert!((0.0..640.0).contains(&p.pos.x));
            assert!((0.0..480.0).contains(&p.pos.y));
        }
    }

    #[test]
    fn test_initialize_replaces_wholesale() {
        let mut field = ParticleField::new(1);
        field.initialize(800.0, 600.0, 80);
        let before = field.particles().to_vec();
        field.initialize(300.0, 200.0, 30);
        assert_eq!(field.len(), 30);
        assert_eq!((field.width(), field.height()), (300.0, 200.0));
        assert!(field.particles().iter().all(|p| p.pos.x < 300.0 && p.pos.y < 200.0));
        assert_ne!(field.particles(), &before[..30]);
    }

    #[test]
    fn test_zero_sized_canvas() {
        let mut field = ParticleField::new(3);
        field.initialize(0.0, 0.0, 5);
        let mut rec = FrameRecorder::new();
        field.advance_frame(&mut rec);
        assert!(field.particles().iter().all(|p| p.pos == Vec2::ZERO));
    }

    #[test]
    fn test_link_alpha_rule() {
        assert_eq!(link_alpha(0.0), Some(0.1));
        assert!((link_alpha(75.0).unwrap() - 0.05).abs() < 1e-6);
        assert!(link_alpha(149.9).unwrap() >= 0.0);
        assert_eq!(link_alpha(150.0), None);
        assert_eq!(link_alpha(400.0), None);
    }

    #[test]
    fn test_links_only_for_close_pairs() {
        let field = ParticleField::from_particles(
            1000.0,
            1000.0,
            vec![still(0.0, 0.0), still(100.0, 0.0), still(0.0, 150.0), still(900.0, 900.0)],
        );
        let links: Vec<Link> = field.links().collect();
        // (0,1) at 100, (0,2) at exactly 150 excluded, (1,2) at ~180 excluded
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].alpha - 0.1 * (1.0 - 100.0 / 150.0)).abs() < 1e-6);
    }

    #[test]
    fn test_no_self_links() {
        let field = ParticleField::from_particles(100.0, 100.0, vec![still(10.0, 10.0)]);
        assert_eq!(field.links().count(), 0);
    }

    #[test]
    fn test_draw_order_and_colors() {
        let field = ParticleField::from_particles(
            200.0,
            100.0,
            vec![still(10.0, 10.0), still(40.0, 50.0)],
        );
        let mut rec = FrameRecorder::new();
        let stats = field.draw(&mut rec);
        assert_eq!(stats, FrameStats { particles: 2, links: 1 });
        assert_eq!(rec.commands[0], DrawCommand::Clear { width: 200.0, height: 100.0 });
        assert!(matches!(rec.commands[1], DrawCommand::Circle { .. }));
        assert!(matches!(rec.commands[2], DrawCommand::Circle { .. }));
        match &rec.commands[3] {
            DrawCommand::Line { width, color, .. } => {
                assert_eq!(*width, 1.0);
                assert!((color.a - 0.1 * (1.0 - 50.0 / 150.0)).abs() < 1e-6);
                assert_eq!((color.r, color.g, color.b), (45, 212, 191));
            }
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn test_advance_frame_moves_then_draws() {
        let mut field = ParticleField::from_particles(
            100.0,
            100.0,
            vec![Particle {
                pos: Vec2::new(50.0, 50.0),
                vel: Vec2::new(0.1, -0.1),
                size: 2.0,
                opacity: 0.2,
            }],
        );
        let mut rec = FrameRecorder::new();
        field.advance_frame(&mut rec);
        match rec.circles().next() {
            Some(DrawCommand::Circle { center, radius, .. }) => {
                assert!((center.x - 50.1).abs() < 1e-4);
                assert!((center.y - 49.9).abs() < 1e-4);
                assert_eq!(*radius, 2.0);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn prop_positions_stay_in_bounds(
            seed in any::<u64>(),
            w in 1.0f32..2000.0,
            h in 1.0f32..2000.0,
            frames in 1usize..200,
        ) {
            let mut field = ParticleField::new(seed);
            field.initialize(w, h, 30);
            let mut rec = FrameRecorder::new();
            for _ in 0..frames {
                rec.reset();
                field.advance_frame(&mut rec);
            }
            for p in field.particles() {
                prop_assert!(p.pos.x >= 0.0 && p.pos.x < w);
                prop_assert!(p.pos.y >= 0.0 && p.pos.y < h);
            }
        }

        #[test]
        fn prop_lines_match_distance_rule(seed in any::<u64>()) {
            let mut field = ParticleField::new(seed);
            field.initialize(400.0, 300.0, 40);
            let mut rec = FrameRecorder::new();
            field.advance_frame(&mut rec);

            let ps = field.particles();
            let mut expected = 0;
            for a in 0..ps.len() {
                for b in a + 1..ps.len() {
                    if ps[a].pos.distance(ps[b].pos) < LINK_DISTANCE {
                        expected += 1;
                    }
                }
            }
            prop_assert_eq!(rec.lines().count(), expected);
            for cmd in rec.lines() {
                if let DrawCommand::Line { from, to, color, .. } = cmd {
                    let d = from.distance(*to);
                    prop_assert!(d < LINK_DISTANCE);
                    prop_assert!(color.a >= 0.0);
                    prop_assert!((color.a - LINK_BASE_ALPHA * (1.0 - d / LINK_DISTANCE)).abs() < 1e-5);
                }
            }
        }
    }
}
