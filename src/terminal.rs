//! Scripted typing terminal
//!
//! Commands are typed one character at a time behind a prompt; output lines
//! appear at once. Every line is followed by a pause and a scroll to the
//! bottom. Playback is a strictly sequential async task and runs once.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::consts::{LINE_PAUSE_MS, PROMPT_GLYPH, TYPE_INTERVAL_MS};
use crate::error::MotionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Typed character by character after the prompt
    Command,
    /// Rendered instantly, styled as output
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptLine {
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub text: String,
}

/// Ordered terminal script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub lines: Vec<ScriptLine>,
}

/// One unit of playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStep<'a> {
    Clear,
    BeginCommand,
    Wait(u32),
    TypeChar(char),
    Output(&'a str),
    ScrollToBottom,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command(mut self, text: impl Into<String>) -> Self {
        self.lines.push(ScriptLine {
            kind: LineKind::Command,
            text: text.into(),
        });
        self
    }

    pub fn output(mut self, text: impl Into<String>) -> Self {
        self.lines.push(ScriptLine {
            kind: LineKind::Output,
            text: text.into(),
        });
        self
    }

    /// The hero section's script
    pub fn portfolio() -> Self {
        Self::new()
            .command("whoami")
            .output("rajesh.ramesh (Senior Infrastructure Architect)")
            .command("kubectl get nodes --context production")
            .output("NAME             STATUS   ROLES    AGE    VERSION")
            .output("prod-node-01     Ready    worker   142d   v1.27.3")
            .output("prod-node-02     Ready    worker   142d   v1.27.3")
            .command("finer enforcer --check-budgets")
            .output("INFO[0001] Scanning cluster costs...")
            .output("SUCCESS: All namespaces within budget (100% compliance)")
            .command("echo $STATUS")
            .output("SYSTEMS_READY_FOR_GIGS")
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Full playback plan, in order
    pub fn steps(&self) -> Vec<TerminalStep<'_>> {
        let mut steps = vec![TerminalStep::Clear];
        for line in &self.lines {
            match line.kind {
                LineKind::Command => {
                    steps.push(TerminalStep::BeginCommand);
                    for c in line.text.chars() {
                        steps.push(TerminalStep::Wait(TYPE_INTERVAL_MS));
                        steps.push(TerminalStep::TypeChar(c));
                    }
                }
                LineKind::Output => steps.push(TerminalStep::Output(&line.text)),
            }
            steps.push(TerminalStep::Wait(LINE_PAUSE_MS));
            steps.push(TerminalStep::ScrollToBottom);
        }
        steps
    }

    /// Total scripted time
    pub fn duration_ms(&self) -> u64 {
        self.steps()
            .iter()
            .map(|step| match step {
                TerminalStep::Wait(ms) => *ms as u64,
                _ => 0,
            })
            .sum()
    }
}

/// Where the terminal renders
pub trait TerminalSurface {
    /// Remove all lines
    fn clear(&mut self);
    /// Append a command line showing `prompt` and an empty typing area
    fn begin_command(&mut self, prompt: &str);
    /// Append one character to the current command line
    fn type_char(&mut self, c: char);
    /// Append a complete output line
    fn push_output(&mut self, text: &str);
    fn scroll_to_bottom(&mut self);
}

/// Timer primitive awaited between steps
pub trait Delay {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}

/// Apply a non-waiting step to `surface`
pub fn apply_step<S: TerminalSurface + ?Sized>(surface: &mut S, step: TerminalStep<'_>) {
    match step {
        TerminalStep::Clear => surface.clear(),
        TerminalStep::BeginCommand => surface.begin_command(PROMPT_GLYPH),
        TerminalStep::TypeChar(c) => surface.type_char(c),
        TerminalStep::Output(text) => surface.push_output(text),
        TerminalStep::ScrollToBottom => surface.scroll_to_bottom(),
        TerminalStep::Wait(_) => {}
    }
}

/// Run the whole script without waiting; returns the time it would take
pub fn replay_instantly<S: TerminalSurface + ?Sized>(script: &Script, surface: &mut S) -> u64 {
    let mut waited = 0u64;
    for step in script.steps() {
        match step {
            TerminalStep::Wait(ms) => waited += ms as u64,
            other => apply_step(surface, other),
        }
    }
    waited
}

/// A terminal that plays its script exactly once
pub struct Terminal<S> {
    script: Script,
    surface: S,
    played: bool,
}

impl<S: TerminalSurface> Terminal<S> {
    pub fn new(script: Script, surface: S) -> Self {
        Self {
            script,
            surface,
            played: false,
        }
    }

    pub fn has_played(&self) -> bool {
        self.played
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Play the script top to bottom. A second call is rejected without
    /// touching the surface.
    pub async fn play<D: Delay>(&mut self, delay: &D) -> Result<(), MotionError> {
        if self.played {
            log::warn!("Terminal playback requested twice; ignoring");
            return Err(MotionError::TerminalAlreadyPlayed);
        }
        self.played = true;
        log::debug!(
            "Terminal playback started ({} lines, {}ms)",
            self.script.len(),
            self.script.duration_ms()
        );

        for step in self.script.steps() {
            match step {
                TerminalStep::Wait(ms) => delay.sleep(ms).await,
                other => apply_step(&mut self.surface, other),
            }
        }

        log::debug!("Terminal playback finished");
        Ok(())
    }
}

/// One rendered line of a `Transcript`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub prompt: Option<String>,
    pub text: String,
}

/// In-memory surface
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    pub lines: Vec<TranscriptLine>,
    pub scrolls: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain-text rendering, one line per row
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|line| match &line.prompt {
                Some(prompt) => format!("{} {}", prompt, line.text),
                None => line.text.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TerminalSurface for Transcript {
    fn clear(&mut self) {
        self.lines.clear();
    }

    fn begin_command(&mut self, prompt: &str) {
        self.lines.push(TranscriptLine {
            kind: LineKind::Command,
            prompt: Some(prompt.to_string()),
            text: String::new(),
        });
    }

    fn type_char(&mut self, c: char) {
        if let Some(line) = self.lines.last_mut() {
            line.text.push(c);
        }
    }

    fn push_output(&mut self, text: &str) {
        self.lines.push(TranscriptLine {
            kind: LineKind::Output,
            prompt: None,
            text: text.to_string(),
        });
    }

    fn scroll_to_bottom(&mut self) {
        self.scrolls += 1;
    }
}
