//! Styled text and runs
//!
//! [`StyledText`] is the boundary representation exchanged with the host
//! editing surface: a string plus an ordered, gap-free list of styled runs.
//! Run ranges are counted in UTF-16 code units, matching the offsets hosts
//! report for carets and selections.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::markdown::Markdown;

/// A contiguous range of text tagged with one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    /// UTF-16 offsets, end exclusive
    pub range: Range<usize>,
    pub style: Markdown,
}

impl StyledRun {
    pub fn new(range: Range<usize>, style: Markdown) -> Self {
        Self { range, style }
    }

    /// Check if this run contains a UTF-16 offset
    pub fn contains(&self, pos: usize) -> bool {
        self.range.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Merge adjacent runs that touch and share a style, dropping empty runs.
///
/// Order is preserved; input is expected to be sorted by start offset.
pub fn coalesce(runs: impl IntoIterator<Item = StyledRun>) -> Vec<StyledRun> {
    let mut result: Vec<StyledRun> = Vec::new();
    for run in runs {
        if run.is_empty() {
            continue;
        }
        match result.last_mut() {
            Some(last) if last.style == run.style && last.range.end >= run.range.start => {
                last.range.end = last.range.end.max(run.range.end);
            }
            _ => result.push(run),
        }
    }
    result
}

/// Number of UTF-16 code units in `s`
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Byte offset of a UTF-16 offset, clamped to the end of `s`.
///
/// An offset that falls inside a surrogate pair resolves to the start of
/// that character.
pub fn utf16_to_byte(s: &str, offset: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in s.char_indices() {
        let next = units + ch.len_utf16();
        if next > offset {
            return idx;
        }
        units = next;
    }
    s.len()
}

/// Text with styled runs covering it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    runs: Vec<StyledRun>,
    /// Length in UTF-16 code units
    len: usize,
}

impl StyledText {
    /// Create empty styled text
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (style, text) pairs in order
    pub fn from_runs<'a>(runs: impl IntoIterator<Item = (Markdown, &'a str)>) -> Self {
        let mut styled = Self::new();
        for (style, text) in runs {
            styled.push(style, text);
        }
        styled
    }

    /// Unstyled text
    pub fn plain(text: &str) -> Self {
        Self::from_runs([(Markdown::NONE, text)])
    }

    /// Append text with a style, merging into the last run when the style matches
    pub fn push(&mut self, style: Markdown, text: &str) {
        if text.is_empty() {
            return;
        }
        let start = self.len;
        self.len += utf16_len(text);
        self.text.push_str(text);

        match self.runs.last_mut() {
            Some(last) if last.style == style => last.range.end = self.len,
            _ => self.runs.push(StyledRun::new(start..self.len, style)),
        }
    }

    /// Restyle a UTF-16 range, clamped to the text
    pub fn set_style(&mut self, range: Range<usize>, style: Markdown) {
        let start = range.start.min(self.len);
        let end = range.end.min(self.len);
        if start >= end {
            return;
        }

        let mut split = Vec::with_capacity(self.runs.len() + 2);
        for run in self.runs.drain(..) {
            let before = run.range.start..run.range.end.min(start);
            let after = run.range.start.max(end)..run.range.end;
            split.push(StyledRun::new(before, run.style));
            if run.range.start < end && run.range.end > start {
                let inside = run.range.start.max(start)..run.range.end.min(end);
                split.push(StyledRun::new(inside, style));
            }
            split.push(StyledRun::new(after, run.style));
        }
        self.runs = coalesce(split);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Length in UTF-16 code units
    pub fn len_utf16(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Remove all text and runs
    pub fn clear(&mut self) {
        self.text.clear();
        self.runs.clear();
        self.len = 0;
    }

    /// Text covered by a UTF-16 range
    pub fn slice(&self, range: Range<usize>) -> &str {
        let start = utf16_to_byte(&self.text, range.start);
        let end = utf16_to_byte(&self.text, range.end).max(start);
        &self.text[start..end]
    }

    /// Style of the character at a UTF-16 offset.
    ///
    /// Out of bounds, including the position just past the last character,
    /// is `NONE`.
    pub fn style_at(&self, location: usize) -> Markdown {
        if location >= self.len {
            return Markdown::NONE;
        }
        // Runs are sorted and gap-free
        let idx = self.runs.partition_point(|run| run.range.end <= location);
        self.runs
            .get(idx)
            .filter(|run| run.contains(location))
            .map(|run| run.style)
            .unwrap_or(Markdown::NONE)
    }

    /// Iterate runs as (style, text) pairs
    pub fn iter(&self) -> impl Iterator<Item = (Markdown, &str)> {
        self.runs
            .iter()
            .map(move |run| (run.style, self.slice(run.range.clone())))
    }

    /// The ranges each style covers within `range`, with touching ranges unified.
    ///
    /// Returns an empty map if `range` is not inside the text.
    pub fn ranges_by_style(&self, range: Range<usize>) -> BTreeMap<Markdown, Vec<Range<usize>>> {
        let mut result: BTreeMap<Markdown, Vec<Range<usize>>> = BTreeMap::new();
        if range.start > range.end || range.end > self.len {
            return result;
        }

        for run in &self.runs {
            let start = run.range.start.max(range.start);
            let end = run.range.end.min(range.end);
            if start >= end {
                continue;
            }
            let ranges = result.entry(run.style).or_default();
            match ranges.last_mut() {
                Some(last) if last.end >= start => last.end = end,
                _ => ranges.push(start..end),
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_coalesces() {
        let text = StyledText::from_runs([(Markdown::BOLD, "He"), (Markdown::BOLD, "llo")]);
        assert_eq!(text.runs(), &[StyledRun::new(0..5, Markdown::BOLD)]);
        assert_eq!(text.text(), "Hello");
    }

    #[test]
    fn test_push_skips_empty() {
        let text = StyledText::from_runs([
            (Markdown::BOLD, "a"),
            (Markdown::ITALIC, ""),
            (Markdown::BOLD, "b"),
        ]);
        assert_eq!(text.runs(), &[StyledRun::new(0..2, Markdown::BOLD)]);
    }

    #[test]
    fn test_utf16_offsets() {
        // U+1F600 takes two UTF-16 units and four bytes
        let text = StyledText::from_runs([(Markdown::NONE, "a\u{1F600}"), (Markdown::BOLD, "é")]);
        assert_eq!(text.len_utf16(), 4);
        assert_eq!(text.runs()[1].range, 3..4);
        assert_eq!(text.slice(1..3), "\u{1F600}");
        assert_eq!(text.style_at(3), Markdown::BOLD);
        assert_eq!(utf16_to_byte("a\u{1F600}é", 3), 5);
    }

    #[test]
    fn test_style_at() {
        let text = StyledText::from_runs([(Markdown::BOLD, "Hi "), (Markdown::NONE, "there")]);
        assert_eq!(text.style_at(0), Markdown::BOLD);
        assert_eq!(text.style_at(2), Markdown::BOLD);
        assert_eq!(text.style_at(3), Markdown::NONE);
        // End of text and beyond
        assert_eq!(text.style_at(8), Markdown::NONE);
        assert_eq!(text.style_at(100), Markdown::NONE);
        assert_eq!(StyledText::new().style_at(0), Markdown::NONE);
    }

    #[test]
    fn test_iter() {
        let text = StyledText::from_runs([(Markdown::CODE, "x"), (Markdown::NONE, " = 1")]);
        let pairs: Vec<_> = text.iter().collect();
        assert_eq!(pairs, vec![(Markdown::CODE, "x"), (Markdown::NONE, " = 1")]);
    }

    #[test]
    fn test_set_style() {
        let mut text = StyledText::plain("Hello world");
        text.set_style(6..11, Markdown::BOLD);
        assert_eq!(
            text.runs(),
            &[
                StyledRun::new(0..6, Markdown::NONE),
                StyledRun::new(6..11, Markdown::BOLD),
            ]
        );

        text.set_style(4..8, Markdown::ITALIC);
        let styles: Vec<_> = text.iter().collect();
        assert_eq!(
            styles,
            vec![
                (Markdown::NONE, "Hell"),
                (Markdown::ITALIC, "o wo"),
                (Markdown::BOLD, "rld"),
            ]
        );

        // Restyling back merges neighbours
        text.set_style(0..11, Markdown::NONE);
        assert_eq!(text.runs(), &[StyledRun::new(0..11, Markdown::NONE)]);
    }

    #[test]
    fn test_set_style_clamps() {
        let mut text = StyledText::plain("abc");
        text.set_style(2..50, Markdown::CODE);
        assert_eq!(text.runs()[1], StyledRun::new(2..3, Markdown::CODE));
        text.set_style(10..20, Markdown::BOLD);
        assert_eq!(text.runs().len(), 2);
    }

    #[test]
    fn test_coalesce() {
        let runs = vec![
            StyledRun::new(0..2, Markdown::BOLD),
            StyledRun::new(2..5, Markdown::BOLD),
            StyledRun::new(5..5, Markdown::ITALIC),
            StyledRun::new(5..7, Markdown::NONE),
            StyledRun::new(7..8, Markdown::BOLD),
        ];
        assert_eq!(
            coalesce(runs),
            vec![
                StyledRun::new(0..5, Markdown::BOLD),
                StyledRun::new(5..7, Markdown::NONE),
                StyledRun::new(7..8, Markdown::BOLD),
            ]
        );
    }

    #[test]
    fn test_ranges_by_style() {
        let mut text = StyledText::from_runs([
            (Markdown::BOLD, "ab"),
            (Markdown::NONE, "cd"),
            (Markdown::BOLD, "ef"),
        ]);
        let map = text.ranges_by_style(1..6);
        assert_eq!(map[&Markdown::BOLD], vec![1..2, 4..6]);
        assert_eq!(map[&Markdown::NONE], vec![2..4]);

        text.set_style(2..4, Markdown::BOLD);
        assert_eq!(text.ranges_by_style(0..6)[&Markdown::BOLD], vec![0..6]);

        assert!(text.ranges_by_style(0..7).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut text = StyledText::plain("abc");
        text.clear();
        assert!(text.is_empty());
        assert_eq!(text.len_utf16(), 0);
        assert!(text.runs().is_empty());
    }
}
