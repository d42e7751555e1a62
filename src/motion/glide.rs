//! Single-property tween with retargeting
//!
//! A glide interpolates from a start value to a target over a duration,
//! beginning at `start_ms`. Retargeting restarts from the currently sampled
//! value, so rapid pointer updates never jump.

use glam::Vec2;

use super::ease::Ease;

/// Values that can be interpolated
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec2::lerp(self, to, t)
    }
}

/// Tween of one value (times in milliseconds)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glide<T> {
    from: T,
    to: T,
    start_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

impl<T: Lerp> Glide<T> {
    /// A glide that is already settled at `value`
    pub fn at_rest(value: T) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: 0.0,
            duration_ms: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn new(from: T, to: T, start_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(0.0),
            ease,
        }
    }

    /// Linear progress in [0, 1]; 0 before the start time
    pub fn progress(&self, now_ms: f64) -> f32 {
        if now_ms < self.start_ms {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Value at `now_ms`
    pub fn sample(&self, now_ms: f64) -> T {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, self.ease.apply(p))
        }
    }

    /// Start a new glide toward `to` from wherever the value is now
    pub fn retarget(&mut self, now_ms: f64, to: T, duration_ms: f64, ease: Ease) {
        self.from = self.sample(now_ms);
        self.to = to;
        self.start_ms = now_ms;
        self.duration_ms = duration_ms.max(0.0);
        self.ease = ease;
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn is_settled(&self, now_ms: f64) -> bool {
        now_ms >= self.start_ms + self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_start_value_before_start() {
        let g = Glide::new(0.0_f32, 10.0, 500.0, 100.0, Ease::Linear);
        assert_eq!(g.sample(0.0), 0.0);
        assert_eq!(g.sample(499.0), 0.0);
        assert!(!g.is_settled(499.0));
    }

    #[test]
    fn test_linear_midpoint_and_end() {
        let g = Glide::new(0.0_f32, 10.0, 0.0, 100.0, Ease::Linear);
        assert!((g.sample(50.0) - 5.0).abs() < 1e-5);
        assert_eq!(g.sample(100.0), 10.0);
        assert_eq!(g.sample(1000.0), 10.0);
        assert!(g.is_settled(100.0));
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let g = Glide::new(Vec2::ZERO, Vec2::new(3.0, 4.0), 10.0, 0.0, Ease::Power4Out);
        assert_eq!(g.sample(9.0), Vec2::ZERO);
        assert_eq!(g.sample(10.0), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_retarget_continues_from_current_value() {
        let mut g = Glide::new(0.0_f32, 100.0, 0.0, 100.0, Ease::Linear);
        g.retarget(50.0, 0.0, 100.0, Ease::Linear);
        assert!((g.sample(50.0) - 50.0).abs() < 1e-4);
        assert!((g.sample(100.0) - 25.0).abs() < 1e-4);
        assert_eq!(g.target(), 0.0);
    }

    #[test]
    fn test_at_rest() {
        let g = Glide::at_rest(2.0_f32);
        assert!(g.is_settled(0.0));
        assert_eq!(g.sample(123.0), 2.0);
    }
}
