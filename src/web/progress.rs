//! Scroll progress bar

use super::dom;
use crate::error::MotionError;
use crate::scroll::{progress_width, scroll_percent};

/// Keep `.scroll-progress` width in step with the scroll position
pub fn setup() -> Result<(), MotionError> {
    let bar = dom::query(".scroll-progress")?;
    let window = dom::window()?;
    let document = dom::document()?;

    let scroller = window.clone();
    dom::on_event(&window, "scroll", move |_| {
        let top = scroller.scroll_y().unwrap_or(0.0);
        let doc_height = document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        let percent = scroll_percent(top, doc_height, dom::viewport_height());
        dom::set_style(&bar, "width", &progress_width(percent));
    })
}
