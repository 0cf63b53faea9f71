//! Incremental two-character jump-to-location search.
//!
//! Type one character and every visible occurrence gets a short label,
//! grouped by the pair (matched char, following char). Optionally type the
//! following character to narrow to one group, then type a label to obtain
//! the jump target. Rendering, keystroke capture, and cursor movement stay
//! behind the [`bridge`] traits, so the engine runs headless.

pub mod bridge;
pub mod config;
pub mod labels;
pub mod search;
pub mod session;
pub mod viewport;

pub use bridge::{EditorView, HighlightBridge, HighlightHandle};
pub use config::SearchConfig;
pub use labels::{LabelAlphabet, DEFAULT_LABELS};
pub use search::{JumpMatch, MatchGroup, MatchIndex, TargetKey};
pub use session::{JumpSession, Stage};
pub use viewport::{ScanDirection, VisibleLines};

#[cfg(test)]
mod tests;
