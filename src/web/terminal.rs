//! DOM surface and timer for the hero terminal

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement};

use super::dom;
use crate::error::MotionError;
use crate::terminal::{Delay, Script, Terminal, TerminalSurface};

/// Renders into `#terminal-body`
pub struct DomTerminal {
    document: Document,
    body: HtmlElement,
    typing: Option<Element>,
}

impl DomTerminal {
    pub fn new() -> Result<Self, MotionError> {
        Ok(Self {
            document: dom::document()?,
            body: dom::query("#terminal-body")?,
            typing: None,
        })
    }

    fn append_line(&self, class: &str) -> Option<Element> {
        let line = self.document.create_element("div").ok()?;
        line.set_class_name(class);
        self.body.append_child(&line).ok()?;
        Some(line)
    }
}

impl TerminalSurface for DomTerminal {
    fn clear(&mut self) {
        self.body.set_inner_html("");
        self.typing = None;
    }

    fn begin_command(&mut self, prompt: &str) {
        let Some(line) = self.append_line("line") else {
            return;
        };
        line.set_inner_html(&format!(
            "<span class=\"prompt\">{prompt}</span> <span class=\"typing-text\"></span>"
        ));
        self.typing = line.query_selector(".typing-text").ok().flatten();
    }

    fn type_char(&mut self, c: char) {
        if let Some(span) = &self.typing {
            let mut text = span.text_content().unwrap_or_default();
            text.push(c);
            span.set_text_content(Some(&text));
        }
    }

    fn push_output(&mut self, text: &str) {
        self.typing = None;
        if let Some(line) = self.append_line("line output") {
            line.set_text_content(Some(text));
        }
    }

    fn scroll_to_bottom(&mut self) {
        self.body.set_scroll_top(self.body.scroll_height());
    }
}

/// `setTimeout` as an awaitable
pub struct TimeoutDelay;

impl Delay for TimeoutDelay {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window().map(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
            });
            if !matches!(scheduled, Some(Ok(_))) {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        async move {
            let _ = JsFuture::from(promise).await;
        }
    }
}

pub fn build() -> Result<Terminal<DomTerminal>, MotionError> {
    Ok(Terminal::new(Script::portfolio(), DomTerminal::new()?))
}

/// Play `terminal` in the background
pub fn launch(mut terminal: Terminal<DomTerminal>) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = terminal.play(&TimeoutDelay).await {
            log::warn!("Terminal playback failed: {}", e);
        }
    });
}
