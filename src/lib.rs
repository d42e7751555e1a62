//! Folio Motion - motion layer for a single-page portfolio
//!
//! Core modules:
//! - `particles`: Canvas particle backdrop (toroidal drift, proximity links)
//! - `renderer`: Drawing seam (2D canvas on web, recorder elsewhere)
//! - `motion`: Easing curves, property glides and timeline layout
//! - `reveal`: Hero entry timeline and one-shot scroll reveals
//! - `terminal`: Scripted typing terminal
//! - `cursor`: Cursor follower and magnetic hover
//! - `scroll`: Scroll progress computation
//! - `web`: Browser wiring (wasm32 only)

pub mod color;
pub mod cursor;
pub mod error;
pub mod motion;
pub mod particles;
pub mod renderer;
pub mod reveal;
pub mod scroll;
pub mod settings;
pub mod terminal;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use color::Rgba;
pub use error::MotionError;
pub use settings::{DeviceClass, MotionPolicy, MotionSettings};

/// Page configuration constants
pub mod consts {
    use crate::color::Rgba;

    /// Accent color shared by particles, links and the cursor follower
    pub const ACCENT: Rgba = Rgba::new(45, 212, 191, 1.0);

    /// Particles closer than this are linked
    pub const LINK_DISTANCE: f32 = 150.0;
    /// Link alpha at zero distance
    pub const LINK_BASE_ALPHA: f32 = 0.1;
    pub const LINK_WIDTH: f32 = 1.0;

    /// Max absolute per-frame velocity component
    pub const PARTICLE_MAX_SPEED: f32 = 0.15;
    pub const PARTICLE_MIN_SIZE: f32 = 0.5;
    pub const PARTICLE_MAX_SIZE: f32 = 2.5;
    pub const PARTICLE_MIN_OPACITY: f32 = 0.1;
    pub const PARTICLE_MAX_OPACITY: f32 = 0.5;

    /// Viewports narrower than this are treated as mobile
    pub const MOBILE_BREAKPOINT: f64 = 768.0;
    pub const MOBILE_PARTICLES: usize = 30;
    pub const DESKTOP_PARTICLES: usize = 80;

    /// Terminal typing cadence (ms per character)
    pub const TYPE_INTERVAL_MS: u32 = 40;
    /// Pause after each terminal line (ms)
    pub const LINE_PAUSE_MS: u32 = 300;
    pub const PROMPT_GLYPH: &str = "$";

    /// Cursor follower glide toward the pointer (ms)
    pub const CURSOR_FOLLOW_MS: f64 = 100.0;
    /// Cursor follower hover scale/color transition (ms)
    pub const CURSOR_HOVER_MS: f64 = 300.0;
    pub const CURSOR_HOVER_SCALE: f32 = 3.0;
    /// Fraction of the pointer offset applied to magnetic elements
    pub const MAGNETIC_STRENGTH: f32 = 0.3;
    pub const MAGNETIC_MS: f64 = 500.0;
}
