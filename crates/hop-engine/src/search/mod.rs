//! Two-character jump search -- find, label, narrow, and resolve
//! occurrences of a typed character in the visible text.
//!
//! Matching is case-insensitive; labels and the narrowing comparison are
//! case-sensitive.

mod engine;
mod types;

pub use engine::*;
pub use types::*;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
