//! One interactive jump search, from first keystroke to teardown.
//!
//! The session owns the match index and, through it, the highlight-handle
//! bookkeeping for the current search. Starting a new search tears the
//! previous one down; nothing search-scoped outlives its session.

use tracing::{debug, warn};

use hop_common::{ConfigError, TextRange};

use crate::bridge::{EditorView, HighlightBridge};
use crate::config::SearchConfig;
use crate::labels::LabelAlphabet;
use crate::search::{JumpMatch, MatchIndex, TargetKey};
use crate::viewport::ScanDirection;

/// Narrowing stage of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// No search in progress.
    #[default]
    Idle,
    /// Matches labelled and highlighted; awaiting a second character or a
    /// direct (key, label) resolution.
    FirstChar,
    /// Narrowed to at most one surviving group; awaiting a label.
    SecondChar,
}

/// Drives the three-stage narrowing protocol over one search at a time.
#[derive(Debug)]
pub struct JumpSession {
    alphabet: LabelAlphabet,
    stage: Stage,
    index: Option<MatchIndex>,
    active_key: Option<TargetKey>,
}

impl JumpSession {
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            alphabet: config.alphabet()?,
            stage: Stage::Idle,
            index: None,
            active_key: None,
        })
    }

    /// Stage 1: tear down any previous search, then scan, label, and
    /// highlight every eligible occurrence of `search_char`.
    ///
    /// Returns the number of labelled matches.
    pub fn begin<V, B>(
        &mut self,
        search_char: char,
        direction: ScanDirection,
        view: &V,
        bridge: &mut B,
    ) -> usize
    where
        V: EditorView + ?Sized,
        B: HighlightBridge + ?Sized,
    {
        self.teardown(bridge);
        let index = MatchIndex::build(search_char, direction, view, self.alphabet.clone(), bridge);
        let count = index.match_count();
        debug!("search {:?}: {count} matches labelled", index.search_char());
        self.index = Some(index);
        self.stage = Stage::FirstChar;
        count
    }

    /// Stage 2: deactivate every group whose key's second character is not
    /// exactly `second`. A no-op while idle.
    pub fn narrow<B: HighlightBridge + ?Sized>(&mut self, second: char, bridge: &mut B) {
        let Some(index) = self.index.as_mut() else {
            return;
        };
        index.narrow(second, bridge);
        self.active_key = index.surviving_key(second);
        self.stage = Stage::SecondChar;
    }

    /// Stage 3 against the key Stage 2 narrowed to.
    ///
    /// `None` when no group survived narrowing or no active match carries
    /// `label`; the caller ignores the keystroke. On success the caller
    /// moves the cursor to the returned range and calls [`cancel`].
    ///
    /// [`cancel`]: JumpSession::cancel
    pub fn resolve_label(&self, label: char) -> Option<TextRange> {
        let index = self.index.as_ref()?;
        let key = self.active_key.as_ref()?;
        index.resolve(key, label).map(|m| m.range)
    }

    /// Stage 3 for callers that track the two-character key themselves.
    pub fn resolve(&self, key: &TargetKey, label: char) -> Option<&JumpMatch> {
        self.index.as_ref()?.resolve(key, label)
    }

    /// Caller-driven teardown: clear all highlights, discard the index,
    /// return to [`Stage::Idle`].
    pub fn cancel<B: HighlightBridge + ?Sized>(&mut self, bridge: &mut B) {
        self.teardown(bridge);
    }

    fn teardown<B: HighlightBridge + ?Sized>(&mut self, bridge: &mut B) {
        if self.index.take().is_some() {
            if let Err(e) = bridge.clear_all() {
                warn!("highlight teardown failed: {e}");
            }
        }
        self.active_key = None;
        self.stage = Stage::Idle;
    }

    pub fn is_active(&self) -> bool {
        self.stage != Stage::Idle
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The index of the in-progress search, if any.
    pub fn index(&self) -> Option<&MatchIndex> {
        self.index.as_ref()
    }

    pub fn match_count(&self) -> usize {
        self.index.as_ref().map_or(0, MatchIndex::match_count)
    }
}

impl Default for JumpSession {
    fn default() -> Self {
        Self {
            alphabet: LabelAlphabet::default(),
            stage: Stage::Idle,
            index: None,
            active_key: None,
        }
    }
}
