//! The page's reveal choreography

use super::trigger::TriggerStart;
use super::{TweenSpec, VisualState};
use crate::motion::{Ease, Position, Timeline};

/// Which element's position gates a reveal group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerTarget {
    /// Every target triggers itself
    Each,
    /// One container triggers the whole group
    Shared(&'static str),
}

/// A scroll-triggered reveal for all elements matching `targets`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealGroup {
    pub targets: &'static str,
    pub trigger: TriggerTarget,
    pub start: TriggerStart,
    pub from: VisualState,
    pub tween: TweenSpec,
}

/// Scroll reveals, in registration order
pub fn page_reveals() -> Vec<RevealGroup> {
    vec![
        RevealGroup {
            targets: ".section-title",
            trigger: TriggerTarget::Each,
            start: TriggerStart::top_at(90.0),
            from: VisualState::hidden().with_x(-30.0),
            tween: TweenSpec::new(1000.0, Ease::Power4Out),
        },
        // Cards trigger late (95%) so short viewports still reveal them
        RevealGroup {
            targets: ".project-card",
            trigger: TriggerTarget::Each,
            start: TriggerStart::top_at(95.0),
            from: VisualState::hidden().with_y(50.0),
            tween: TweenSpec::new(1000.0, Ease::Power3Out),
        },
        RevealGroup {
            targets: ".bento-box",
            trigger: TriggerTarget::Shared(".bento-container"),
            start: TriggerStart::top_at(85.0),
            from: VisualState::hidden().with_y(40.0),
            tween: TweenSpec::new(1000.0, Ease::Power4Out).stagger(150.0),
        },
        RevealGroup {
            targets: ".skill-list span",
            trigger: TriggerTarget::Shared(".bento-container"),
            start: TriggerStart::top_at(85.0),
            from: VisualState::hidden().with_scale(0.8),
            tween: TweenSpec::new(700.0, Ease::BackOut(1.7)).stagger(80.0),
        },
        RevealGroup {
            targets: ".timeline-item",
            trigger: TriggerTarget::Shared(".timeline"),
            start: TriggerStart::top_at(80.0),
            from: VisualState::hidden().with_x(-40.0),
            tween: TweenSpec::new(1000.0, Ease::Power4Out).stagger(150.0),
        },
        RevealGroup {
            targets: ".edu-card",
            trigger: TriggerTarget::Shared(".education-grid"),
            start: TriggerStart::top_at(85.0),
            from: VisualState::hidden().with_y(30.0),
            tween: TweenSpec::new(800.0, Ease::Power4Out).stagger(200.0),
        },
    ]
}

/// One entry of the hero timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeroStep {
    Reveal {
        targets: &'static str,
        from: VisualState,
        ease: Ease,
    },
    /// Kick off the terminal typing
    StartTerminal,
}

impl HeroStep {
    fn reveal(targets: &'static str, from: VisualState, ease: Ease) -> Self {
        HeroStep::Reveal { targets, from, ease }
    }
}

/// Load-time entry sequence for the hero block
pub fn hero_timeline() -> Timeline<HeroStep> {
    let out4 = Ease::Power4Out;
    Timeline::new()
        .push(
            HeroStep::reveal(".logo", VisualState::hidden().with_y(-30.0), out4),
            1000.0,
            0.0,
            Position::Sequential,
        )
        .push(
            HeroStep::reveal(".nav-links a", VisualState::hidden().with_y(-20.0), out4),
            800.0,
            100.0,
            Position::Overlap(700.0),
        )
        .push(
            HeroStep::reveal(".sub-title", VisualState::hidden().with_x(-30.0), out4),
            1000.0,
            0.0,
            Position::Overlap(500.0),
        )
        .push(
            HeroStep::reveal(".main-title", VisualState::hidden().with_y(50.0), out4),
            1200.0,
            0.0,
            Position::Overlap(800.0),
        )
        .push(
            HeroStep::reveal(".hero-description", VisualState::hidden().with_y(30.0), out4),
            1000.0,
            0.0,
            Position::Overlap(800.0),
        )
        .push(
            HeroStep::reveal(".badge", VisualState::hidden().with_scale(0.8), Ease::BackOut(2.0)),
            800.0,
            100.0,
            Position::Overlap(600.0),
        )
        .push(
            HeroStep::reveal(".terminal-wrapper", VisualState::hidden().with_scale(0.9), out4),
            1200.0,
            0.0,
            Position::Overlap(1000.0),
        )
        .call(HeroStep::StartTerminal, Position::Overlap(500.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(step: &HeroStep) -> usize {
        match step {
            HeroStep::Reveal { targets: ".nav-links a", .. } => 4,
            HeroStep::Reveal { targets: ".badge", .. } => 3,
            _ => 1,
        }
    }

    #[test]
    fn test_hero_start_times() {
        let tl = hero_timeline();
        let starts: Vec<f64> = tl.layout(counts).iter().map(|(_, p)| p.start_ms).collect();
        assert_eq!(
            starts,
            vec![0.0, 300.0, 900.0, 1100.0, 1500.0, 1900.0, 1900.0, 2600.0]
        );
        assert_eq!(tl.total_ms(counts), 3100.0);
    }

    #[test]
    fn test_terminal_is_last_and_inside_timeline() {
        let tl = hero_timeline();
        let layout = tl.layout(counts);
        let (step, placement) = layout.last().unwrap();
        assert_eq!(**step, HeroStep::StartTerminal);
        assert!(placement.start_ms < tl.total_ms(counts));
    }

    #[test]
    fn test_reduced_motion_hero_starts_immediately() {
        let tl = hero_timeline().scale_time(0.0);
        assert!(tl.layout(counts).iter().all(|(_, p)| p.start_ms == 0.0 && p.span_ms == 0.0));
    }

    #[test]
    fn test_page_reveal_groups() {
        let groups = page_reveals();
        assert_eq!(groups.len(), 6);
        assert!(groups.iter().all(|g| g.from.opacity == 0.0));

        let skills = groups.iter().find(|g| g.targets == ".skill-list span").unwrap();
        assert_eq!(skills.trigger, TriggerTarget::Shared(".bento-container"));
        assert_eq!(skills.tween.ease, Ease::BackOut(1.7));
        assert_eq!(skills.from.scale, 0.8);

        let titles = groups.iter().find(|g| g.targets == ".section-title").unwrap();
        assert_eq!(titles.trigger, TriggerTarget::Each);
        assert!((titles.start.viewport_fraction - 0.9).abs() < 1e-12);
    }
}
