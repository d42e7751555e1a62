//! Error taxonomy for browser wiring
//!
//! Every feature is set up independently; a failure only disables that
//! feature and is logged, never surfaced to the visitor.

/// Errors raised while wiring a feature to the page
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element '{0}' not found")]
    MissingElement(String),

    #[error("2d canvas context unavailable")]
    CanvasUnavailable,

    #[error("terminal script already played")]
    TerminalAlreadyPlayed,

    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for MotionError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        MotionError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MotionError::MissingElement(".scroll-progress".into()).to_string(),
            "element '.scroll-progress' not found"
        );
        assert_eq!(
            MotionError::TerminalAlreadyPlayed.to_string(),
            "terminal script already played"
        );
    }
}
