//! Delimiter matchers
//!
//! A [`Matcher`] pairs an atomic style with the compiled regex that finds
//! its markers in syntax text.

use std::ops::Range;

use regex::Regex;

use super::flags::Markdown;
use crate::error::{MarkdownError, Result};

/// One match of a delimiter pattern, as byte ranges into the searched text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedMatch {
    /// Opening marker
    pub open: Range<usize>,
    /// Text between the markers
    pub content: Range<usize>,
    /// Closing marker; empty for line-anchored styles
    pub close: Range<usize>,
}

impl DelimitedMatch {
    /// Whole matched span
    pub fn span(&self) -> Range<usize> {
        self.open.start..self.close.end.max(self.content.end)
    }
}

/// A compiled pattern for one atomic style
#[derive(Debug, Clone)]
pub struct Matcher {
    /// Name for debugging
    pub name: String,
    /// Style given to the content of each match
    pub markdown: Markdown,
    pub pattern: Regex,
}

impl Matcher {
    /// Compile a matcher. The pattern needs at least the opening marker and
    /// content groups; a third group is taken as the closing marker.
    pub fn new(name: &str, markdown: Markdown, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| MarkdownError::InvalidPattern {
            name: name.to_string(),
            source,
        })?;

        // Groups are counted including the implicit whole-match group
        if regex.captures_len() < 3 {
            return Err(MarkdownError::InvalidPattern {
                name: name.to_string(),
                source: regex::Error::Syntax(format!(
                    "expected marker and content groups in {:?}",
                    pattern
                )),
            });
        }

        Ok(Self {
            name: name.to_string(),
            markdown,
            pattern: regex,
        })
    }

    /// Find all non-overlapping matches, left to right
    pub fn find_all(&self, text: &str) -> Vec<DelimitedMatch> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let open = caps.get(1)?.range();
                let content = caps.get(2)?.range();
                let close = caps
                    .get(3)
                    .map(|m| m.range())
                    .unwrap_or(content.end..content.end);
                Some(DelimitedMatch { open, content, close })
            })
            .collect()
    }
}
