//! Copy-to-clipboard: a port with a system implementation and a terminal
//! escape-sequence fallback, plus the button feedback state.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use base64::Engine;

/// How long the button keeps its "Copied" label.
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(900);

pub trait Clipboard {
    fn name(&self) -> &'static str;
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Fails when no clipboard is reachable (headless, SSH, no display).
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().context("open system clipboard")?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_string())
            .context("write system clipboard")
    }
}

/// OSC 52: asks the terminal to set the clipboard. Works over SSH.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
        write!(self.out, "\x1b]52;c;{}\x07", encoded).context("write osc52 sequence")?;
        self.out.flush().context("flush osc52 sequence")
    }
}

/// The system clipboard when it can be opened, OSC 52 on stdout otherwise.
pub fn detect() -> Box<dyn Clipboard> {
    match SystemClipboard::new() {
        Ok(c) => Box::new(c),
        Err(err) => {
            tracing::debug!(error = %format!("{:#}", err), "falling back to osc52 clipboard");
            Box::new(Osc52Clipboard::new(std::io::stdout()))
        }
    }
}

/// Label state of a copy button: swaps to "Copied" after a successful copy
/// and reverts once the feedback period is over.
#[derive(Clone, Debug)]
pub struct CopyButton {
    label: String,
    feedback_until: Option<Instant>,
}

impl CopyButton {
    pub const COPIED: &'static str = "Copied";

    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            feedback_until: None,
        }
    }

    /// Copies `text`; on failure the label stays as it was.
    pub fn click(&mut self, clipboard: &mut dyn Clipboard, text: &str, now: Instant) -> Result<()> {
        clipboard.copy(text)?;
        tracing::debug!(via = clipboard.name(), bytes = text.len(), "copied");
        self.feedback_until = Some(now + COPIED_FEEDBACK);
        Ok(())
    }

    pub fn label_at(&self, now: Instant) -> &str {
        match self.feedback_until {
            Some(until) if now < until => Self::COPIED,
            _ => &self.label,
        }
    }

    pub fn is_showing_feedback(&self, now: Instant) -> bool {
        self.feedback_until.is_some_and(|until| now < until)
    }
}

#[cfg(test)]
#[path = "tests/clipboard_tests.rs"]
mod tests;
