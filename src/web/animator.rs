//! Per-frame style writer for reveal tweens, the cursor follower and
//! magnetic elements

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::dom;
use crate::cursor::{Bounds, CursorFollower, CursorFrame, Magnet};
use crate::motion::Glide;
use crate::reveal::VisualState;

struct ElementTween {
    el: HtmlElement,
    glide: Glide<VisualState>,
}

struct Follower {
    el: HtmlElement,
    state: CursorFollower,
    last: Option<CursorFrame>,
}

struct MagnetSlot {
    el: HtmlElement,
    magnet: Magnet,
    /// Inline transform currently written
    displaced: bool,
}

/// Everything the motion loop writes to the DOM
#[derive(Default)]
pub struct Animator {
    tweens: Vec<ElementTween>,
    follower: Option<Follower>,
    magnets: Vec<MagnetSlot>,
}

impl Animator {
    /// Track `el` through `glide`; its start state is written immediately
    pub fn add_tween(&mut self, el: HtmlElement, glide: Glide<VisualState>) {
        dom::apply_visual(&el, glide.sample(dom::now()));
        self.tweens.push(ElementTween { el, glide });
    }

    pub fn set_follower(&mut self, el: HtmlElement) {
        self.follower = Some(Follower {
            el,
            state: CursorFollower::new(),
            last: None,
        });
    }

    pub fn pointer_moved(&mut self, now_ms: f64, pointer: Vec2) {
        if let Some(f) = &mut self.follower {
            f.state.pointer_moved(now_ms, pointer);
        }
    }

    pub fn engage(&mut self, now_ms: f64) {
        if let Some(f) = &mut self.follower {
            f.state.engage(now_ms);
        }
    }

    pub fn release(&mut self, now_ms: f64) {
        if let Some(f) = &mut self.follower {
            f.state.release(now_ms);
        }
    }

    /// Register a magnetic element; returns its slot
    pub fn add_magnet(&mut self, el: HtmlElement) -> usize {
        self.magnets.push(MagnetSlot {
            el,
            magnet: Magnet::new(),
            displaced: false,
        });
        self.magnets.len() - 1
    }

    pub fn magnet_moved(&mut self, slot: usize, now_ms: f64, pointer: Vec2, bounds: Bounds) {
        if let Some(m) = self.magnets.get_mut(slot) {
            m.magnet.pointer_moved(now_ms, pointer, bounds);
            m.displaced = true;
        }
    }

    pub fn release_magnet(&mut self, slot: usize, now_ms: f64) {
        if let Some(m) = self.magnets.get_mut(slot) {
            m.magnet.release(now_ms);
        }
    }

    /// Write the state of everything in motion at `now_ms`
    pub fn tick(&mut self, now_ms: f64) {
        self.tweens.retain(|t| {
            if t.glide.is_settled(now_ms) {
                dom::clear_visual(&t.el);
                false
            } else {
                dom::apply_visual(&t.el, t.glide.sample(now_ms));
                true
            }
        });

        if let Some(f) = &mut self.follower {
            let frame = f.state.sample(now_ms);
            if f.last != Some(frame) {
                dom::set_style(&f.el, "transform", &frame.transform_css());
                dom::set_style(&f.el, "background-color", &frame.fill_css());
                f.last = Some(frame);
            }
        }

        for m in &mut self.magnets {
            if !m.displaced {
                continue;
            }
            if m.magnet.is_at_rest(now_ms) {
                let _ = m.el.style().remove_property("transform");
                m.displaced = false;
            } else {
                let offset = m.magnet.sample(now_ms);
                dom::set_style(
                    &m.el,
                    "transform",
                    &format!("translate({}px, {}px)", offset.x, offset.y),
                );
            }
        }
    }
}

/// Drive `animator` from `requestAnimationFrame` for the page's lifetime
pub fn start(animator: Rc<RefCell<Animator>>) {
    request_animation_frame(animator);
}

fn request_animation_frame(animator: Rc<RefCell<Animator>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        animator.borrow_mut().tick(time);
        request_animation_frame(animator);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
