//! Scanner types: ScanDirection.

use serde::{Deserialize, Serialize};

/// Which side of the cursor a search targets.
///
/// Direction only filters positions on the cursor's own line; every other
/// visible line is scanned in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScanDirection {
    #[default]
    Forward,
    Backward,
}
