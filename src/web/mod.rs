//! Browser wiring
//!
//! Binds the platform-free modules to the page. Each feature is set up on
//! its own; a missing element or API disables only that feature.

mod animator;
mod cursor;
mod dom;
mod particles;
mod progress;
mod reveal;
mod terminal;

use std::cell::RefCell;
use std::rc::Rc;

use animator::Animator;
use wasm_bindgen::prelude::*;

use crate::error::MotionError;
use crate::settings::{DeviceClass, MotionSettings};

/// Start every effect once the document has been parsed
pub fn run() {
    let loading = dom::document()
        .map(|d| d.ready_state() == "loading")
        .unwrap_or(false);
    if !loading {
        start();
        return;
    }
    let deferred = dom::document().and_then(|d| {
        let mut pending = Some(start);
        dom::on_event(&d, "DOMContentLoaded", move |_| {
            if let Some(start) = pending.take() {
                start();
            }
        })
    });
    report("page load hook", deferred);
}

fn start() {
    let settings = MotionSettings::load();
    let policy = settings.policy(dom::prefers_reduced_motion());
    let device = DeviceClass::from_viewport_width(dom::viewport_width());
    log::info!(
        "Folio motion starting: {} viewport, {:?} motion",
        device.as_str(),
        policy
    );

    let animator = Rc::new(RefCell::new(Animator::default()));

    report("scroll progress", progress::setup());

    let count = settings.particle_count(device);
    if count > 0 {
        report("particle backdrop", particles::setup(count));
    }

    if settings.cursor_follower {
        let magnetic = settings.effective_magnetic_hover(policy);
        report("cursor follower", cursor::setup(&animator, magnetic));
    }

    let shell = if settings.terminal {
        match terminal::build() {
            Ok(shell) => Some(shell),
            Err(e) => {
                log::warn!("terminal disabled: {}", e);
                None
            }
        }
    } else {
        None
    };
    report("hero timeline", reveal::setup_hero(&animator, policy, shell));
    report("scroll reveals", reveal::setup_scroll_reveals(&animator, policy));

    animator::start(animator);
}

/// Persist the visitor's reduced-motion choice; takes effect on next load
#[wasm_bindgen]
pub fn set_reduced_motion(reduced: bool) {
    let mut settings = MotionSettings::load();
    settings.reduced_motion = reduced;
    settings.save();
}

fn report(feature: &str, result: Result<(), MotionError>) {
    match result {
        Ok(()) => log::debug!("{} ready", feature),
        Err(e) => log::warn!("{} disabled: {}", feature, e),
    }
}
