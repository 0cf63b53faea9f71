//! Viewport scanning -- which lines and character positions a search may
//! inspect.
//!
//! The visible ranges come from the editor view (they can be discontinuous
//! when regions are folded); the cursor and scan direction decide which
//! positions on the cursor's own line are eligible.

mod scan;
mod types;

pub use scan::*;
pub use types::*;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
