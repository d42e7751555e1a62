//! Cursor follower and magnetic hover
//!
//! The follower trails the pointer with a short glide and swells while over
//! interactive elements. Links and buttons additionally drift toward the
//! pointer and spring back on leave.

use glam::Vec2;

use crate::color::Rgba;
use crate::consts::*;
use crate::motion::{Ease, Glide};

/// Elements that make the follower react
pub const INTERACTIVE_SELECTOR: &str = "a, button, .project-card, .bento-box";

/// Element rectangle in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Displacement of a magnetic element for a pointer at `pointer`
pub fn magnetic_offset(pointer: Vec2, bounds: Bounds) -> Vec2 {
    (pointer - bounds.center()) * MAGNETIC_STRENGTH
}

/// How an interactive element reacts to hover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveKind {
    /// Follower feedback and pointer-driven displacement
    Magnetic,
    /// Follower feedback only
    Highlight,
}

impl InteractiveKind {
    /// Classify by DOM tag name (case-insensitive)
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("a") || tag.eq_ignore_ascii_case("button") {
            InteractiveKind::Magnetic
        } else {
            InteractiveKind::Highlight
        }
    }
}

/// Follower fill while idle
pub const IDLE_FILL: Rgba = Rgba::new(ACCENT.r, ACCENT.g, ACCENT.b, 0.0);
/// Follower fill while over an interactive element
pub const ENGAGED_FILL: Rgba = Rgba::new(ACCENT.r, ACCENT.g, ACCENT.b, 0.1);

/// Sampled follower appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    pub position: Vec2,
    pub scale: f32,
    pub fill: Rgba,
}

impl CursorFrame {
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.position.x, self.position.y, self.scale
        )
    }

    /// CSS background; fully transparent fills render as `transparent`
    pub fn fill_css(&self) -> String {
        if self.fill.a <= 0.0 {
            "transparent".to_string()
        } else {
            self.fill.css()
        }
    }
}

/// The decorative follower element's animated state
#[derive(Debug, Clone)]
pub struct CursorFollower {
    position: Glide<Vec2>,
    scale: Glide<f32>,
    fill: Glide<Rgba>,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorFollower {
    pub fn new() -> Self {
        Self {
            position: Glide::at_rest(Vec2::ZERO),
            scale: Glide::at_rest(1.0),
            fill: Glide::at_rest(IDLE_FILL),
        }
    }

    pub fn pointer_moved(&mut self, now_ms: f64, pointer: Vec2) {
        self.position
            .retarget(now_ms, pointer, CURSOR_FOLLOW_MS, Ease::Power2Out);
    }

    /// Pointer entered an interactive element
    pub fn engage(&mut self, now_ms: f64) {
        self.scale
            .retarget(now_ms, CURSOR_HOVER_SCALE, CURSOR_HOVER_MS, Ease::Power1Out);
        self.fill
            .retarget(now_ms, ENGAGED_FILL, CURSOR_HOVER_MS, Ease::Power1Out);
    }

    /// Pointer left an interactive element
    pub fn release(&mut self, now_ms: f64) {
        self.scale
            .retarget(now_ms, 1.0, CURSOR_HOVER_MS, Ease::Power1Out);
        self.fill
            .retarget(now_ms, IDLE_FILL, CURSOR_HOVER_MS, Ease::Power1Out);
    }

    pub fn sample(&self, now_ms: f64) -> CursorFrame {
        CursorFrame {
            position: self.position.sample(now_ms),
            scale: self.scale.sample(now_ms),
            fill: self.fill.sample(now_ms),
        }
    }
}

/// Displacement state of one magnetic element
#[derive(Debug, Clone)]
pub struct Magnet {
    offset: Glide<Vec2>,
}

impl Default for Magnet {
    fn default() -> Self {
        Self::new()
    }
}

impl Magnet {
    pub fn new() -> Self {
        Self {
            offset: Glide::at_rest(Vec2::ZERO),
        }
    }

    /// Pointer moved while inside the element
    pub fn pointer_moved(&mut self, now_ms: f64, pointer: Vec2, bounds: Bounds) {
        self.offset.retarget(
            now_ms,
            magnetic_offset(pointer, bounds),
            MAGNETIC_MS,
            Ease::Power4Out,
        );
    }

    /// Spring back to rest
    pub fn release(&mut self, now_ms: f64) {
        self.offset
            .retarget(now_ms, Vec2::ZERO, MAGNETIC_MS, Ease::Power4Out);
    }

    pub fn sample(&self, now_ms: f64) -> Vec2 {
        self.offset.sample(now_ms)
    }

    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.offset.is_settled(now_ms)
    }

    /// Settled back at the rest position
    pub fn is_at_rest(&self, now_ms: f64) -> bool {
        self.is_settled(now_ms) && self.offset.target() == Vec2::ZERO
    }
}
