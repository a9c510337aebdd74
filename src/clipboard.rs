//! Clipboard hand-off for the generated password.

use log::debug;
use zeroize::Zeroize;

use crate::error::ClipboardError;

/// Anything that can receive the password text.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the egui platform integration.
pub struct EguiClipboard<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiClipboard<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl ClipboardSink for EguiClipboard<'_> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx.copy_text(text.to_string());
        Ok(())
    }
}

/// Copies `result` to `sink`, then wipes `result`.
///
/// An empty `result` means nothing has been generated yet; the sink is not
/// touched in that case.
pub fn copy_result<S: ClipboardSink + ?Sized>(
    result: &mut String,
    sink: &mut S,
) -> Result<(), ClipboardError> {
    if result.is_empty() {
        return Err(ClipboardError::NothingToCopy);
    }
    sink.set_text(result)?;
    debug!("copied {} characters to clipboard", result.len());
    result.zeroize();
    Ok(())
}
