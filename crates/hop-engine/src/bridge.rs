//! Collaborator seams: the editor view the engine scans and the highlight
//! renderer it drives.
//!
//! The engine never captures keystrokes, paints decorations, or moves the
//! cursor itself. Callers hand it these two capabilities and keep cursor
//! movement for themselves; a resolved match only returns a location.

use hop_common::{BridgeError, LineRange, TextPosition, TextRange};

/// Opaque token for one rendered highlight, minted by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightHandle(pub u64);

/// Read access to the text visible in an editor viewport.
pub trait EditorView {
    /// Visible line intervals in ascending order. Intervals may be
    /// discontinuous (folded regions); overlaps are tolerated and deduped
    /// by the scanner.
    fn visible_line_ranges(&self) -> Vec<LineRange>;

    /// Cursor position while the selection is empty, `None` otherwise.
    fn active_cursor(&self) -> Option<TextPosition>;

    /// Text of `line` without its trailing newline; empty for lines outside
    /// the buffer.
    fn line_text(&self, line: usize) -> String;
}

/// Rendering capability for jump labels.
///
/// Calls are fire-and-forget: a failure is reported to the caller but never
/// rolls back engine state.
pub trait HighlightBridge {
    /// Render `label` over the two-character `range`.
    fn highlight(&mut self, range: TextRange, label: char) -> Result<HighlightHandle, BridgeError>;

    /// Remove a single highlight.
    fn clear_highlight(&mut self, handle: HighlightHandle) -> Result<(), BridgeError>;

    /// Remove every highlight this bridge has rendered.
    fn clear_all(&mut self) -> Result<(), BridgeError>;
}
