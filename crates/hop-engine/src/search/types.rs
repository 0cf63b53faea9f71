//! Match-index types: TargetKey, JumpMatch, MatchGroup.

use std::fmt;

use hop_common::TextRange;

use crate::bridge::HighlightHandle;

/// Single-character lowercase fold used for matching and keys.
pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

// ---------------------------------------------------------------------------
// TargetKey
// ---------------------------------------------------------------------------

/// The case-folded two-character key a match is grouped under: the matched
/// character plus the character that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetKey {
    pub first: char,
    pub second: char,
}

impl TargetKey {
    /// Build a key from raw buffer characters, folding both.
    pub fn new(first: char, second: char) -> Self {
        Self {
            first: fold(first),
            second: fold(second),
        }
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

// ---------------------------------------------------------------------------
// JumpMatch
// ---------------------------------------------------------------------------

/// One labelled occurrence of the searched character.
#[derive(Debug, Clone)]
pub struct JumpMatch {
    /// The two-character span of the occurrence.
    pub range: TextRange,
    /// Label shown to the user; unique within the group.
    pub label: char,
    /// Cleared by Stage-2 narrowing; never set back within a session.
    pub active: bool,
    /// Bridge token for the rendered highlight, when rendering succeeded.
    pub handle: Option<HighlightHandle>,
}

// ---------------------------------------------------------------------------
// MatchGroup
// ---------------------------------------------------------------------------

/// The ordered matches sharing one key.
///
/// Insertion order is discovery order, which alone decides label
/// assignment. A group never grows past the alphabet size.
#[derive(Debug, Clone, Default)]
pub struct MatchGroup {
    pub(crate) matches: Vec<JumpMatch>,
}

impl MatchGroup {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JumpMatch> {
        self.matches.iter()
    }

    /// Whether any match in the group is still active.
    pub fn is_active(&self) -> bool {
        self.matches.iter().any(|m| m.active)
    }
}
