//! Copy-to-clipboard button.
//!
//! A [`CopyButton`] is bound to a button in the page markup and to the text
//! of the element right after it (typically a `<pre>` snippet). Pressing it
//! puts that text on the clipboard and flips the label to "Copied!" until
//! the reset delay passes.

use crate::page::{sibling_text, PageError};
use std::time::Duration;
use tokio::sync::watch;

pub const LABEL_IDLE: &str = "Copy";
pub const LABEL_COPIED: &str = "Copied!";

/// Default time the "Copied!" label stays up.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard that keeps the last copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

pub struct CopyButton {
    sibling_text: String,
    label: watch::Sender<&'static str>,
}

impl CopyButton {
    /// Binds the button with `button_id` in `html` to the text of its next
    /// sibling element. Fails if either is missing.
    pub fn bind(html: &str, button_id: &str) -> Result<Self, PageError> {
        let text = sibling_text(html, button_id)?;
        let (label, _) = watch::channel(LABEL_IDLE);
        Ok(Self {
            sibling_text: text,
            label,
        })
    }

    pub fn label(&self) -> &'static str {
        *self.label.borrow()
    }

    /// Receiver that sees every label change.
    pub fn subscribe(&self) -> watch::Receiver<&'static str> {
        self.label.subscribe()
    }

    pub fn sibling_text(&self) -> &str {
        &self.sibling_text
    }

    /// Copies the sibling's text, shows "Copied!", and restores "Copy" after
    /// `reset_after`. The label is left untouched if the clipboard write fails.
    pub async fn copy<C: Clipboard>(
        &self,
        clipboard: &mut C,
        reset_after: Duration,
    ) -> Result<(), ClipboardError> {
        clipboard.write_text(&self.sibling_text)?;
        self.label.send_replace(LABEL_COPIED);
        tracing::debug!("copied {} bytes", self.sibling_text.len());

        tokio::time::sleep(reset_after).await;
        self.label.send_replace(LABEL_IDLE);
        Ok(())
    }
}
