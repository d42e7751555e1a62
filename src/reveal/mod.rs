//! Entry and scroll reveal animations
//!
//! Every reveal is a "from" tween: the element starts hidden/offset and
//! settles into its natural layout. Scroll reveals are gated by a one-shot
//! trigger; the hero block plays as a timeline on load.

pub mod presets;
pub mod trigger;

use glam::Vec2;

use crate::motion::{Ease, Glide, Lerp};
use crate::settings::MotionPolicy;

pub use presets::{HeroStep, RevealGroup, TriggerTarget, hero_timeline, page_reveals};
pub use trigger::{OneShotTrigger, TriggerStart};

/// Animated visual properties of a reveal target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Translation in CSS pixels
    pub offset: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

impl VisualState {
    /// The element as laid out by CSS
    pub const NATURAL: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
        opacity: 1.0,
    };

    /// Natural geometry, fully transparent
    pub const fn hidden() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            opacity: 0.0,
        }
    }

    pub const fn with_x(mut self, x: f32) -> Self {
        self.offset.x = x;
        self
    }

    pub const fn with_y(mut self, y: f32) -> Self {
        self.offset.y = y;
        self
    }

    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn is_natural(&self) -> bool {
        *self == Self::NATURAL
    }

    /// CSS `transform` value
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}

impl Lerp for VisualState {
    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            offset: self.offset.lerp(to.offset, t),
            scale: Lerp::lerp(self.scale, to.scale, t),
            opacity: Lerp::lerp(self.opacity, to.opacity, t),
        }
    }
}

/// Duration, curve and per-target delay of a reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration_ms: f64,
    pub ease: Ease,
    pub stagger_ms: f64,
}

impl TweenSpec {
    pub const fn new(duration_ms: f64, ease: Ease) -> Self {
        Self {
            duration_ms,
            ease,
            stagger_ms: 0.0,
        }
    }

    pub const fn stagger(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    /// Timing under a motion policy (reduced motion snaps)
    pub fn under(self, policy: MotionPolicy) -> Self {
        let k = policy.time_scale();
        Self {
            duration_ms: self.duration_ms * k,
            stagger_ms: self.stagger_ms * k,
            ..self
        }
    }
}

/// A group of targets revealed together once a trigger fires
#[derive(Debug, Clone)]
pub struct Reveal {
    from: VisualState,
    tween: TweenSpec,
    trigger: OneShotTrigger,
}

impl Reveal {
    pub fn new(from: VisualState, tween: TweenSpec, start: TriggerStart) -> Self {
        Self {
            from,
            tween,
            trigger: OneShotTrigger::new(start),
        }
    }

    /// Feed the trigger element's current top edge. Returns `true` exactly
    /// once, when the reveal starts.
    pub fn check(&mut self, element_top: f64, viewport_height: f64, now_ms: f64) -> bool {
        let fired = self.trigger.check(element_top, viewport_height, now_ms);
        if fired {
            log::debug!("Reveal triggered at {:.0}ms", now_ms);
        }
        fired
    }

    /// `check` for a trigger element currently rendered at `applied`.
    /// The injected vertical offset is removed so the trigger sees the
    /// element's layout position.
    pub fn check_layout(
        &mut self,
        measured_top: f64,
        applied: VisualState,
        viewport_height: f64,
        now_ms: f64,
    ) -> bool {
        self.check(measured_top - applied.offset.y as f64, viewport_height, now_ms)
    }

    pub fn initial_state(&self) -> VisualState {
        self.from
    }

    /// Tween of the `index`th target, once fired
    pub fn glide(&self, index: usize) -> Option<Glide<VisualState>> {
        let fired_at = self.trigger.fired_at()?;
        Some(Glide::new(
            self.from,
            VisualState::NATURAL,
            fired_at + self.tween.stagger_ms * index as f64,
            self.tween.duration_ms,
            self.tween.ease,
        ))
    }

    /// Visual state of the `index`th target at `now_ms`
    pub fn state_of(&self, index: usize, now_ms: f64) -> VisualState {
        match self.glide(index) {
            Some(glide) => glide.sample(now_ms),
            None => self.from,
        }
    }
}
