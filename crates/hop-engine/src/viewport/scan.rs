//! Visible-line iteration and cursor-relative position eligibility.

use hop_common::{LineRange, TextPosition};

use crate::bridge::EditorView;

use super::types::ScanDirection;

/// Lazy iterator over the lines visible in a view.
///
/// Yields `(line_number, line_text)` for each visible line at most once, in
/// ascending order, even when the view reports overlapping ranges. The
/// iteration can be rewound with [`VisibleLines::restart`].
pub struct VisibleLines<'a, V: EditorView + ?Sized> {
    view: &'a V,
    ranges: Vec<LineRange>,
    range_idx: usize,
    line: usize,
    last_yielded: Option<usize>,
}

impl<'a, V: EditorView + ?Sized> VisibleLines<'a, V> {
    pub fn new(view: &'a V) -> Self {
        let ranges = view.visible_line_ranges();
        let line = ranges.first().map(|r| r.start).unwrap_or(0);
        Self {
            view,
            ranges,
            range_idx: 0,
            line,
            last_yielded: None,
        }
    }

    /// Rewind to the first visible line.
    pub fn restart(&mut self) {
        self.range_idx = 0;
        self.line = self.ranges.first().map(|r| r.start).unwrap_or(0);
        self.last_yielded = None;
    }
}

impl<V: EditorView + ?Sized> Iterator for VisibleLines<'_, V> {
    type Item = (usize, String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let range = *self.ranges.get(self.range_idx)?;
            if self.line < range.start {
                self.line = range.start;
            }
            if self.line > range.end {
                self.range_idx += 1;
                if let Some(next) = self.ranges.get(self.range_idx) {
                    self.line = next.start;
                }
                continue;
            }

            let line = self.line;
            self.line += 1;

            // Overlapping ranges: a line an earlier range already produced
            // is not produced again.
            if matches!(self.last_yielded, Some(last) if line <= last) {
                continue;
            }
            self.last_yielded = Some(line);
            return Some((line, self.view.line_text(line)));
        }
    }
}

/// Cursor-relative eligibility for a character position.
///
/// A position is skipped only when it sits on the cursor's line on the
/// wrong side of the cursor for `direction`; the cursor column itself is
/// skipped in both directions. With no cursor (non-empty selection) every
/// position is eligible.
pub fn is_position_eligible(
    line: usize,
    col: usize,
    cursor: Option<TextPosition>,
    direction: ScanDirection,
) -> bool {
    let Some(cursor) = cursor else {
        return true;
    };
    if line != cursor.line {
        return true;
    }
    match direction {
        ScanDirection::Forward => col > cursor.col,
        ScanDirection::Backward => col < cursor.col,
    }
}
