//! Easing curves
//!
//! Named after their GSAP equivalents.

/// Easing curve mapping linear progress [0, 1] to eased progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    Linear,
    /// `power1.out` (quadratic)
    #[default]
    Power1Out,
    /// `power2.out` (cubic)
    Power2Out,
    /// `power3.out` (quartic)
    Power3Out,
    /// `power4.out` (quintic)
    Power4Out,
    /// `back.out(overshoot)`
    BackOut(f32),
}

impl Ease {
    /// Eased progress for `t`; input is clamped to [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power4Out => 1.0 - (1.0 - t).powi(5),
            Ease::BackOut(overshoot) => {
                let u = t - 1.0;
                u * u * ((overshoot + 1.0) * u + overshoot) + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 6] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power4Out,
        Ease::BackOut(1.7),
    ];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_input_clamped() {
        assert_eq!(Ease::Power4Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power4Out.apply(7.0), 1.0);
    }

    #[test]
    fn test_out_curves_lead_linear() {
        for ease in [Ease::Power1Out, Ease::Power2Out, Ease::Power3Out, Ease::Power4Out] {
            assert!(ease.apply(0.3) > 0.3, "{ease:?}");
        }
        // Higher powers decelerate harder
        assert!(Ease::Power4Out.apply(0.3) > Ease::Power2Out.apply(0.3));
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(2.0).apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }
}
