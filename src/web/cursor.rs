//! Cursor follower and magnetic links/buttons

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use web_sys::MouseEvent;

use super::animator::Animator;
use super::dom;
use crate::cursor::{INTERACTIVE_SELECTOR, InteractiveKind};
use crate::error::MotionError;

fn pointer(e: &MouseEvent) -> Vec2 {
    Vec2::new(e.client_x() as f32, e.client_y() as f32)
}

/// Hook `.cursor-follower` to the pointer. With `magnetic` set, links and
/// buttons also drift toward the pointer while hovered.
pub fn setup(animator: &Rc<RefCell<Animator>>, magnetic: bool) -> Result<(), MotionError> {
    let follower = dom::query(".cursor-follower")?;
    dom::set_style(&follower, "border-color", "var(--accent-primary)");
    animator.borrow_mut().set_follower(follower);

    {
        let animator = animator.clone();
        dom::on_mouse(&dom::document()?, "mousemove", move |e| {
            animator.borrow_mut().pointer_moved(dom::now(), pointer(&e));
        })?;
    }

    let interactive = dom::query_all(INTERACTIVE_SELECTOR);
    let mut magnets = 0;
    for el in &interactive {
        let slot = (magnetic && InteractiveKind::from_tag(&el.tag_name()) == InteractiveKind::Magnetic)
            .then(|| animator.borrow_mut().add_magnet(el.clone()));

        {
            let animator = animator.clone();
            dom::on_mouse(el, "mouseenter", move |_| {
                animator.borrow_mut().engage(dom::now());
            })?;
        }
        {
            let animator = animator.clone();
            dom::on_mouse(el, "mouseleave", move |_| {
                let now = dom::now();
                let mut animator = animator.borrow_mut();
                animator.release(now);
                if let Some(slot) = slot {
                    animator.release_magnet(slot, now);
                }
            })?;
        }

        if let Some(slot) = slot {
            magnets += 1;
            let animator = animator.clone();
            let target = el.clone();
            dom::on_mouse(el, "mousemove", move |e| {
                let bounds = dom::bounds(&target);
                animator
                    .borrow_mut()
                    .magnet_moved(slot, dom::now(), pointer(&e), bounds);
            })?;
        }
    }

    log::info!(
        "Cursor follower tracking {} interactive elements ({} magnetic)",
        interactive.len(),
        magnets
    );
    Ok(())
}
