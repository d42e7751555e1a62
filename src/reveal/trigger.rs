//! Viewport triggers

/// `"top N%"`: fires when the element's top edge reaches N% of the
/// viewport height, measured from the top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerStart {
    pub viewport_fraction: f64,
}

impl TriggerStart {
    pub const fn top_at(percent: f64) -> Self {
        Self {
            viewport_fraction: percent / 100.0,
        }
    }

    pub fn is_crossed(&self, element_top: f64, viewport_height: f64) -> bool {
        element_top <= viewport_height * self.viewport_fraction
    }
}

/// Trigger that fires on the first crossing and never again
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneShotTrigger {
    start: TriggerStart,
    fired_at: Option<f64>,
}

impl OneShotTrigger {
    pub fn new(start: TriggerStart) -> Self {
        Self {
            start,
            fired_at: None,
        }
    }

    /// Returns `true` only on the check that fires
    pub fn check(&mut self, element_top: f64, viewport_height: f64, now_ms: f64) -> bool {
        if self.fired_at.is_some() || !self.start.is_crossed(element_top, viewport_height) {
            return false;
        }
        self.fired_at = Some(now_ms);
        true
    }

    pub fn fired_at(&self) -> Option<f64> {
        self.fired_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        let start = TriggerStart::top_at(90.0);
        assert!(!start.is_crossed(901.0, 1000.0));
        assert!(start.is_crossed(900.0, 1000.0));
        // Already scrolled past on load still counts
        assert!(start.is_crossed(-3000.0, 1000.0));
    }

    #[test]
    fn test_one_shot_keeps_first_time() {
        let mut t = OneShotTrigger::new(TriggerStart::top_at(85.0));
        assert!(!t.check(999.0, 1000.0, 1.0));
        assert!(t.check(100.0, 1000.0, 2.0));
        assert!(!t.check(100.0, 1000.0, 3.0));
        assert_eq!(t.fired_at(), Some(2.0));
    }
}
