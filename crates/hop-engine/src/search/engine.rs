//! Match index: build, narrow, and resolve jump targets.

use std::collections::HashMap;

use tracing::{debug, error, trace, warn};

use hop_common::TextRange;

use crate::bridge::{EditorView, HighlightBridge};
use crate::labels::LabelAlphabet;
use crate::viewport::{is_position_eligible, ScanDirection, VisibleLines};

use super::types::{fold, JumpMatch, MatchGroup, TargetKey};

/// Every labelled occurrence of one searched character, grouped by
/// two-character key.
///
/// Built fresh per search (Stage 1), narrowed in place (Stage 2), consulted
/// for the final location (Stage 3), then discarded by the caller.
#[derive(Debug)]
pub struct MatchIndex {
    search_char: char,
    groups: HashMap<TargetKey, MatchGroup>,
    alphabet: LabelAlphabet,
}

impl MatchIndex {
    /// Stage 1: scan the view and label every eligible occurrence of
    /// `search_char` (matched case-insensitively).
    ///
    /// Discovery order is left-to-right within a line, lines in viewport
    /// order; that order alone decides label assignment. Every created
    /// match gets a highlight request; a bridge failure is logged and the
    /// match is kept without a handle.
    pub fn build<V, B>(
        search_char: char,
        direction: ScanDirection,
        view: &V,
        alphabet: LabelAlphabet,
        bridge: &mut B,
    ) -> Self
    where
        V: EditorView + ?Sized,
        B: HighlightBridge + ?Sized,
    {
        let needle = fold(search_char);
        let cursor = view.active_cursor();
        let mut groups: HashMap<TargetKey, MatchGroup> = HashMap::new();
        let mut dropped = 0usize;

        for (line, text) in VisibleLines::new(view) {
            // Two trailing fillers so a match on the last real character
            // still forms a two-character key. Fillers themselves are never
            // matched: only real positions are scanned.
            let padded: Vec<char> = text.chars().chain([' ', ' ']).collect();
            for col in 0..padded.len() - 2 {
                if !is_position_eligible(line, col, cursor, direction) {
                    continue;
                }
                if fold(padded[col]) != needle {
                    continue;
                }

                let key = TargetKey::new(padded[col], padded[col + 1]);
                let group = groups.entry(key).or_default();
                if group.matches.len() >= alphabet.len() {
                    // At cap: dropped without feedback.
                    dropped += 1;
                    continue;
                }
                let label = match alphabet.get(group.matches.len()) {
                    Ok(label) => label,
                    Err(e) => {
                        // Unreachable: the cap check bounds the index.
                        error!("label assignment failed: {e}");
                        continue;
                    }
                };
                group.matches.push(JumpMatch {
                    range: TextRange::pair_at(line, col),
                    label,
                    active: true,
                    handle: None,
                });
            }
        }

        if dropped > 0 {
            debug!(
                "dropped {dropped} occurrences past the {}-label group cap",
                alphabet.len()
            );
        }

        let mut index = Self {
            search_char: needle,
            groups,
            alphabet,
        };
        trace!(
            "search {:?}: {} matches in {} groups",
            index.search_char,
            index.match_count(),
            index.groups.len()
        );
        index.request_highlights(bridge);
        index
    }

    fn request_highlights<B: HighlightBridge + ?Sized>(&mut self, bridge: &mut B) {
        for group in self.groups.values_mut() {
            for m in &mut group.matches {
                match bridge.highlight(m.range, m.label) {
                    Ok(handle) => m.handle = Some(handle),
                    Err(e) => warn!("highlight failed at {}: {e}", m.range.start),
                }
            }
        }
    }

    /// Stage 2: deactivate every group whose key's second character is not
    /// exactly `second` and clear its highlights.
    ///
    /// Keys are case-folded but this comparison is not, preserving the
    /// matching/labeling case split. Narrowing is one-way: deactivated
    /// matches stay deactivated for the rest of the session.
    pub fn narrow<B: HighlightBridge + ?Sized>(&mut self, second: char, bridge: &mut B) {
        for (key, group) in self.groups.iter_mut() {
            if key.second == second {
                continue;
            }
            for m in &mut group.matches {
                m.active = false;
                if let Some(handle) = m.handle.take() {
                    if let Err(e) = bridge.clear_highlight(handle) {
                        warn!("highlight clear failed at {}: {e}", m.range.start);
                    }
                }
            }
        }
        trace!(
            "narrowed on {second:?}: {} of {} matches active",
            self.active_count(),
            self.match_count()
        );
    }

    /// Stage 3: the active match at `(key, label)`.
    ///
    /// `None` for an unknown key, an unknown label, or a match Stage 2
    /// deactivated. Resolution does not mutate the index; the caller moves
    /// the cursor, clears remaining highlights, and discards the index.
    pub fn resolve(&self, key: &TargetKey, label: char) -> Option<&JumpMatch> {
        self.groups
            .get(key)?
            .matches
            .iter()
            .find(|m| m.active && m.label == label)
    }

    /// The group registered for `key`, if the search produced one.
    pub fn group(&self, key: &TargetKey) -> Option<&MatchGroup> {
        self.groups.get(key)
    }

    /// The key whose folded second character equals `second` exactly, i.e.
    /// the group a narrow on `second` leaves standing.
    pub fn surviving_key(&self, second: char) -> Option<TargetKey> {
        self.groups.keys().find(|k| k.second == second).copied()
    }

    /// The folded character this index was built for.
    pub fn search_char(&self) -> char {
        self.search_char
    }

    /// Iterate every group with its key, in no particular order.
    pub fn groups(&self) -> impl Iterator<Item = (&TargetKey, &MatchGroup)> {
        self.groups.iter()
    }

    pub fn match_count(&self) -> usize {
        self.groups.values().map(MatchGroup::len).sum()
    }

    pub fn active_count(&self) -> usize {
        self.groups
            .values()
            .flat_map(|g| g.matches.iter())
            .filter(|m| m.active)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(MatchGroup::is_empty)
    }
}
