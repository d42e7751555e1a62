//! Full-viewport particle backdrop

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::dom;
use crate::error::MotionError;
use crate::particles::ParticleField;
use crate::renderer::CanvasPainter;

struct Backdrop {
    canvas: HtmlCanvasElement,
    painter: CanvasPainter,
    field: ParticleField,
    count: usize,
}

impl Backdrop {
    /// Match the viewport and respawn the population
    fn resize(&mut self) {
        let width = dom::viewport_width().max(0.0) as u32;
        let height = dom::viewport_height().max(0.0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field
            .initialize(width as f32, height as f32, self.count);
        log::debug!("Particle field resized to {}x{}", width, height);
    }
}

/// Insert `#particle-canvas` behind the page and animate `count` particles
pub fn setup(count: usize) -> Result<(), MotionError> {
    let document = dom::document()?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MotionError::CanvasUnavailable)?;
    canvas.set_id("particle-canvas");
    let body = document
        .body()
        .ok_or_else(|| MotionError::MissingElement("body".to_string()))?;
    body.prepend_with_node_1(&canvas)?;

    let painter = CanvasPainter::new(&canvas)?;
    let seed = js_sys::Date::now() as u64;
    let backdrop = Rc::new(RefCell::new(Backdrop {
        canvas,
        painter,
        field: ParticleField::new(seed),
        count,
    }));
    backdrop.borrow_mut().resize();

    {
        let backdrop = backdrop.clone();
        dom::on_event(&dom::window()?, "resize", move |_| {
            backdrop.borrow_mut().resize();
        })?;
    }

    log::info!("Particle backdrop running with {} particles", count);
    request_animation_frame(backdrop);
    Ok(())
}

fn request_animation_frame(backdrop: Rc<RefCell<Backdrop>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        {
            let mut b = backdrop.borrow_mut();
            let Backdrop { painter, field, .. } = &mut *b;
            field.advance_frame(painter);
        }
        request_animation_frame(backdrop);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
