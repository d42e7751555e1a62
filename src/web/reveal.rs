//! Hero entry timeline and scroll-triggered reveals

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::HtmlElement;

use super::animator::Animator;
use super::dom;
use super::terminal::{self, DomTerminal};
use crate::error::MotionError;
use crate::motion::Glide;
use crate::reveal::{HeroStep, Reveal, TriggerTarget, VisualState, hero_timeline, page_reveals};
use crate::settings::MotionPolicy;
use crate::terminal::Terminal;

/// Queue the hero timeline; the terminal starts at its slot in the sequence
pub fn setup_hero(
    animator: &Rc<RefCell<Animator>>,
    policy: MotionPolicy,
    shell: Option<Terminal<DomTerminal>>,
) -> Result<(), MotionError> {
    let timeline = hero_timeline().scale_time(policy.time_scale());

    let mut elements: HashMap<&'static str, Vec<HtmlElement>> = HashMap::new();
    for step in timeline.payloads() {
        if let HeroStep::Reveal { targets, .. } = step {
            let found = dom::query_all(targets);
            if found.is_empty() {
                log::debug!("Hero step '{}' matched nothing", targets);
            }
            elements.insert(*targets, found);
        }
    }

    let counts = |step: &HeroStep| match step {
        HeroStep::Reveal { targets, .. } => elements.get(targets).map_or(0, Vec::len),
        HeroStep::StartTerminal => 1,
    };

    let t0 = dom::now();
    let mut shell = shell;
    for (step, placement) in timeline.layout(&counts) {
        match step {
            HeroStep::Reveal { targets, from, ease } => {
                let Some(found) = elements.get(targets) else {
                    continue;
                };
                let mut animator = animator.borrow_mut();
                for (i, el) in found.iter().enumerate() {
                    let glide = Glide::new(
                        *from,
                        VisualState::NATURAL,
                        t0 + placement.target_start_ms(i),
                        placement.duration_ms,
                        *ease,
                    );
                    animator.add_tween(el.clone(), glide);
                }
            }
            HeroStep::StartTerminal => {
                if let Some(shell) = shell.take() {
                    dom::after(placement.start_ms, move || terminal::launch(shell))?;
                }
            }
        }
    }

    log::info!("Hero timeline queued ({:.0}ms)", timeline.total_ms(&counts));
    Ok(())
}

/// A reveal waiting for its trigger element to scroll into range
struct PendingReveal {
    trigger: HtmlElement,
    /// The trigger is also the animated target and carries its offset
    self_triggered: bool,
    targets: Vec<HtmlElement>,
    reveal: Reveal,
}

/// Hide every reveal target and start them as their triggers are crossed
pub fn setup_scroll_reveals(
    animator: &Rc<RefCell<Animator>>,
    policy: MotionPolicy,
) -> Result<(), MotionError> {
    let mut pending = Vec::new();

    for group in page_reveals() {
        let targets = dom::query_all(group.targets);
        if targets.is_empty() {
            log::debug!("Reveal group '{}' matched nothing", group.targets);
            continue;
        }
        let tween = group.tween.under(policy);

        match group.trigger {
            TriggerTarget::Each => {
                for el in targets {
                    dom::apply_visual(&el, group.from);
                    pending.push(PendingReveal {
                        trigger: el.clone(),
                        self_triggered: true,
                        targets: vec![el],
                        reveal: Reveal::new(group.from, tween, group.start),
                    });
                }
            }
            TriggerTarget::Shared(selector) => {
                let trigger = match dom::query(selector) {
                    Ok(trigger) => trigger,
                    Err(e) => {
                        log::warn!("Reveal group '{}' skipped: {}", group.targets, e);
                        continue;
                    }
                };
                for el in &targets {
                    dom::apply_visual(el, group.from);
                }
                pending.push(PendingReveal {
                    trigger,
                    self_triggered: false,
                    targets,
                    reveal: Reveal::new(group.from, tween, group.start),
                });
            }
        }
    }

    log::info!("{} scroll reveals armed", pending.len());
    let pending = Rc::new(RefCell::new(pending));
    check_triggers(&pending, animator);

    let window = dom::window()?;
    for event in ["scroll", "resize"] {
        let pending = pending.clone();
        let animator = animator.clone();
        dom::on_event(&window, event, move |_| check_triggers(&pending, &animator))?;
    }
    Ok(())
}

fn check_triggers(pending: &RefCell<Vec<PendingReveal>>, animator: &RefCell<Animator>) {
    let viewport_height = dom::viewport_height();
    let now = dom::now();
    pending.borrow_mut().retain_mut(|p| {
        let top = p.trigger.get_bounding_client_rect().top();
        let applied = if p.self_triggered {
            p.reveal.initial_state()
        } else {
            VisualState::NATURAL
        };
        if !p.reveal.check_layout(top, applied, viewport_height, now) {
            return true;
        }
        let mut animator = animator.borrow_mut();
        for (i, el) in p.targets.iter().enumerate() {
            if let Some(glide) = p.reveal.glide(i) {
                animator.add_tween(el.clone(), glide);
            }
        }
        false
    });
}
