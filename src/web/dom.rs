//! Thin DOM helpers

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent, Window};

use crate::cursor::Bounds;
use crate::error::MotionError;
use crate::reveal::VisualState;

pub fn window() -> Result<Window, MotionError> {
    web_sys::window().ok_or(MotionError::NoWindow)
}

pub fn document() -> Result<Document, MotionError> {
    window()?.document().ok_or(MotionError::NoDocument)
}

/// `performance.now()` in ms (0 if unavailable)
pub fn now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// First element matching `selector`
pub fn query(selector: &str) -> Result<HtmlElement, MotionError> {
    document()?
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| MotionError::MissingElement(selector.to_string()))
}

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document().and_then(|d| Ok(d.query_selector_all(selector)?)) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Write a reveal state as inline transform/opacity
pub fn apply_visual(el: &HtmlElement, state: VisualState) {
    set_style(el, "transform", &state.transform_css());
    set_style(el, "opacity", &state.opacity.to_string());
}

/// Hand transform/opacity back to the stylesheet
pub fn clear_visual(el: &HtmlElement) {
    let style = el.style();
    let _ = style.remove_property("transform");
    let _ = style.remove_property("opacity");
}

pub fn bounds(el: &Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

/// Listen for a plain event for the page's lifetime
pub fn on_event(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), MotionError> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Listen for a mouse event for the page's lifetime
pub fn on_mouse(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(MouseEvent) + 'static,
) -> Result<(), MotionError> {
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `ms` milliseconds
pub fn after(ms: f64, f: impl FnOnce() + 'static) -> Result<(), MotionError> {
    let closure = Closure::once(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        ms.max(0.0).round() as i32,
    )?;
    closure.forget();
    Ok(())
}
