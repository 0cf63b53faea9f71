//! End-to-end tests: the full first-char / second-char / label protocol
//! against an in-memory editor view and a recording bridge.

use crate::bridge::{EditorView, HighlightBridge, HighlightHandle};
use crate::config::SearchConfig;
use crate::search::TargetKey;
use crate::session::{JumpSession, Stage};
use crate::viewport::ScanDirection;
use hop_common::{BridgeError, LineRange, TextPosition, TextRange};

/// In-memory buffer with a viewport over all of its lines.
struct FakeEditor {
    lines: Vec<String>,
    ranges: Vec<LineRange>,
    cursor: Option<TextPosition>,
}

impl FakeEditor {
    fn new(lines: &[&str]) -> Self {
        let ranges = if lines.is_empty() {
            Vec::new()
        } else {
            vec![LineRange::new(0, lines.len() - 1)]
        };
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            ranges,
            cursor: None,
        }
    }

    fn cursor_at(mut self, line: usize, col: usize) -> Self {
        self.cursor = Some(TextPosition::new(line, col));
        self
    }

    fn viewport(mut self, ranges: &[(usize, usize)]) -> Self {
        self.ranges = ranges.iter().map(|&(s, e)| LineRange::new(s, e)).collect();
        self
    }
}

impl EditorView for FakeEditor {
    fn visible_line_ranges(&self) -> Vec<LineRange> {
        self.ranges.clone()
    }

    fn active_cursor(&self) -> Option<TextPosition> {
        self.cursor
    }

    fn line_text(&self, line: usize) -> String {
        self.lines.get(line).cloned().unwrap_or_default()
    }
}

/// Records every highlight the engine requests and what it clears.
#[derive(Default)]
struct RecordingBridge {
    next_id: u64,
    live: Vec<(HighlightHandle, TextRange, char)>,
    clear_all_calls: usize,
}

impl RecordingBridge {
    fn live_labels(&self) -> Vec<char> {
        let mut labels: Vec<char> = self.live.iter().map(|(_, _, l)| *l).collect();
        labels.sort_unstable();
        labels
    }
}

impl HighlightBridge for RecordingBridge {
    fn highlight(&mut self, range: TextRange, label: char) -> Result<HighlightHandle, BridgeError> {
        let handle = HighlightHandle(self.next_id);
        self.next_id += 1;
        self.live.push((handle, range, label));
        Ok(handle)
    }

    fn clear_highlight(&mut self, handle: HighlightHandle) -> Result<(), BridgeError> {
        self.live.retain(|(h, _, _)| *h != handle);
        Ok(())
    }

    fn clear_all(&mut self) -> Result<(), BridgeError> {
        self.clear_all_calls += 1;
        self.live.clear();
        Ok(())
    }
}

#[test]
fn cat_car_cap_resolves_to_the_middle_occurrence() {
    // Three occurrences of 'c', all keyed "ca", labelled e/a/r in
    // discovery order.
    let editor = FakeEditor::new(&["cat car cap"]);
    let mut bridge = RecordingBridge::default();
    let mut session = JumpSession::default();

    let count = session.begin('c', ScanDirection::Forward, &editor, &mut bridge);
    assert_eq!(count, 3);
    assert_eq!(bridge.live_labels(), vec!['a', 'e', 'r']);

    // The group key's second char is 'a', so narrowing keeps all three.
    session.narrow('a', &mut bridge);
    assert_eq!(session.index().unwrap().active_count(), 3);
    assert_eq!(bridge.live.len(), 3);

    let range = session.resolve_label('a').unwrap();
    assert_eq!(range.start, TextPosition::new(0, 4));
    assert_eq!(range.end, TextPosition::new(0, 6));

    // Caller jumps, then tears the session down.
    session.cancel(&mut bridge);
    assert!(bridge.live.is_empty());
    assert!(!session.is_active());
}

#[test]
fn cat_dog_cup_narrows_away_the_ca_group() {
    let editor = FakeEditor::new(&["cat dog cup"]);
    let mut bridge = RecordingBridge::default();
    let mut session = JumpSession::default();

    let count = session.begin('c', ScanDirection::Forward, &editor, &mut bridge);
    assert_eq!(count, 2);

    session.narrow('u', &mut bridge);

    let index = session.index().unwrap();
    assert!(!index.group(&TargetKey::new('c', 'a')).unwrap().is_active());
    assert!(index.group(&TargetKey::new('c', 'u')).unwrap().is_active());
    assert_eq!(bridge.live.len(), 1);

    let range = session.resolve_label('e').unwrap();
    assert_eq!(range.start, TextPosition::new(0, 8));
}

#[test]
fn direction_filters_only_the_cursor_line() {
    let lines = &["cat", "cat cat cat", "cat"];
    let mut bridge = RecordingBridge::default();
    let mut session = JumpSession::default();

    // Cursor mid-line-1: forward keeps only positions right of col 4 there,
    // while lines 0 and 2 are scanned in full.
    let editor = FakeEditor::new(lines).cursor_at(1, 4);
    session.begin('c', ScanDirection::Forward, &editor, &mut bridge);
    let positions: Vec<(usize, usize)> = session
        .index()
        .unwrap()
        .group(&TargetKey::new('c', 'a'))
        .unwrap()
        .iter()
        .map(|m| (m.range.start.line, m.range.start.col))
        .collect();
    assert_eq!(positions, vec![(0, 0), (1, 8), (2, 0)]);

    // Backward from the same spot keeps only col 0 on line 1.
    let editor = FakeEditor::new(lines).cursor_at(1, 4);
    session.begin('c', ScanDirection::Backward, &editor, &mut bridge);
    let positions: Vec<(usize, usize)> = session
        .index()
        .unwrap()
        .group(&TargetKey::new('c', 'a'))
        .unwrap()
        .iter()
        .map(|m| (m.range.start.line, m.range.start.col))
        .collect();
    assert_eq!(positions, vec![(0, 0), (1, 0), (2, 0)]);
}

#[test]
fn folded_viewport_only_scans_visible_lines() {
    let editor = FakeEditor::new(&["cat", "cab", "car", "cap"]).viewport(&[(0, 0), (2, 3)]);
    let mut bridge = RecordingBridge::default();
    let mut session = JumpSession::default();

    session.begin('c', ScanDirection::Forward, &editor, &mut bridge);
    let lines: Vec<usize> = session
        .index()
        .unwrap()
        .group(&TargetKey::new('c', 'a'))
        .unwrap()
        .iter()
        .map(|m| m.range.start.line)
        .collect();
    assert_eq!(lines, vec![0, 2, 3]);
}

#[test]
fn a_new_search_replaces_highlights_wholesale() {
    let editor = FakeEditor::new(&["cat car cap"]);
    let mut bridge = RecordingBridge::default();
    let mut session = JumpSession::default();

    session.begin('c', ScanDirection::Forward, &editor, &mut bridge);
    assert_eq!(bridge.live.len(), 3);

    // Restarting with a different character clears everything first.
    let count = session.begin('t', ScanDirection::Forward, &editor, &mut bridge);
    assert_eq!(bridge.clear_all_calls, 1);
    assert_eq!(count, 1);
    assert_eq!(bridge.live.len(), 1);
    assert_eq!(session.stage(), Stage::FirstChar);
}

#[test]
fn custom_alphabet_caps_and_labels_groups() {
    let config = SearchConfig {
        labels: "12".into(),
    };
    let editor = FakeEditor::new(&["ca ca ca"]);
    let mut bridge = RecordingBridge::default();
    let mut session = JumpSession::new(&config).unwrap();

    // Three "ca" occurrences against a two-label alphabet: the third is
    // silently dropped.
    let count = session.begin('c', ScanDirection::Forward, &editor, &mut bridge);
    assert_eq!(count, 2);
    assert_eq!(bridge.live_labels(), vec!['1', '2']);

    session.narrow('a', &mut bridge);
    assert_eq!(
        session.resolve_label('2').unwrap().start,
        TextPosition::new(0, 3)
    );
    assert!(session.resolve_label('3').is_none());
}

#[test]
fn selection_disables_cursor_filtering() {
    // With a non-empty selection there is no active cursor, so even
    // positions "behind" the would-be cursor are eligible.
    let editor = FakeEditor::new(&["cat cat"]);
    let mut bridge = RecordingBridge::default();
    let mut session = JumpSession::default();

    let count = session.begin('c', ScanDirection::Forward, &editor, &mut bridge);
    assert_eq!(count, 2);
}
