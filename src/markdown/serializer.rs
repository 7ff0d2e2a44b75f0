//! Styled runs to markdown syntax
//!
//! Converts an ordered sequence of styled runs into a string with markdown
//! markers inserted. Open styles are kept on a stack; each run either
//! continues what is open, opens only the bits it adds, or closes scopes
//! until one of those applies.

use tracing::trace;

use super::flags::Markdown;
use super::syntax::syntax_for;
use crate::text::StyledText;

/// Serialize styled text into markdown syntax
pub fn serialize(text: &StyledText) -> String {
    serialize_runs(text.iter())
}

/// Serialize (style, text) runs into markdown syntax.
///
/// Runs must be in document order. Adjacent runs with the same style are
/// fine; they simply continue the open scope.
pub fn serialize_runs<'a>(runs: impl IntoIterator<Item = (Markdown, &'a str)>) -> String {
    let mut writer = SyntaxWriter::default();
    for (markdown, content) in runs {
        writer.process(markdown, content);
    }
    writer.finish()
}

/// Stack of open scopes plus the output written so far
#[derive(Debug, Default)]
struct SyntaxWriter {
    stack: Vec<Markdown>,
    result: String,
}

impl SyntaxWriter {
    fn push(&mut self, markdown: Markdown, content: &str) {
        trace!(style = %markdown, "open");
        self.stack.push(markdown);
        self.result.push_str(syntax_for(markdown).prefix);
        self.result.push_str(content);
    }

    fn pop(&mut self) {
        // Header suffixes are empty; no line break is added after a header.
        if let Some(last) = self.stack.pop() {
            trace!(style = %last, "close");
            self.result.push_str(syntax_for(last).suffix);
        }
    }

    /// Union of every open scope
    fn combined(&self) -> Markdown {
        self.stack
            .iter()
            .fold(Markdown::NONE, |acc, markdown| acc.union(*markdown))
    }

    fn process(&mut self, markdown: Markdown, content: &str) {
        loop {
            if self.stack.is_empty() {
                self.push(markdown, content);
                return;
            }

            let combined = self.combined();

            if markdown == combined {
                self.result.push_str(content);
                return;
            }

            if combined.is_disjoint(markdown) {
                self.pop();
                continue;
            }

            let unique = markdown.subtract(combined);
            if unique.is_empty() {
                self.pop();
            } else {
                self.push(unique, content);
                return;
            }
        }
    }

    fn finish(mut self) -> String {
        while !self.stack.is_empty() {
            self.pop();
        }
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ser(runs: &[(Markdown, &str)]) -> String {
        serialize_runs(runs.iter().copied())
    }

    #[test]
    fn test_empty() {
        assert_eq!(ser(&[]), "");
        assert_eq!(serialize(&StyledText::new()), "");
    }

    #[test]
    fn test_plain() {
        assert_eq!(ser(&[(Markdown::NONE, "just text")]), "just text");
    }

    #[test]
    fn test_bold_then_plain() {
        assert_eq!(ser(&[(Markdown::BOLD, "Hi "), (Markdown::NONE, "there")]), "**Hi **there");
    }

    #[test]
    fn test_header() {
        assert_eq!(ser(&[(Markdown::HEADER1, "Title")]), "# Title");
        assert_eq!(
            ser(&[(Markdown::HEADER3, "Sub"), (Markdown::NONE, "\nbody")]),
            "### Sub\nbody"
        );
    }

    #[test]
    fn test_header_gets_no_line_break() {
        // Keeping headers on their own line is up to the caller
        assert_eq!(ser(&[(Markdown::HEADER2, "A"), (Markdown::NONE, "b")]), "## Ab");
    }

    #[test]
    fn test_composite() {
        assert_eq!(ser(&[(Markdown::BOLD_ITALIC, "Hi")]), "**_Hi_**");
    }

    #[test]
    fn test_nested_superset() {
        let out = ser(&[
            (Markdown::BOLD, "a "),
            (Markdown::BOLD_ITALIC, "b"),
            (Markdown::BOLD, " c"),
        ]);
        assert_eq!(out, "**a _b_ c**");
    }

    #[test]
    fn test_subset_closes_inner_scope() {
        let out = ser(&[
            (Markdown::ITALIC, "x "),
            (Markdown::BOLD_ITALIC, "y"),
            (Markdown::ITALIC, " z"),
        ]);
        assert_eq!(out, "_x **y** z_");
    }

    #[test]
    fn test_composite_then_atom() {
        // The composite is opened as one scope, so narrowing it closes both
        let out = ser(&[(Markdown::BOLD_ITALIC, "a"), (Markdown::BOLD, "b")]);
        assert_eq!(out, "**_a_****b**");
    }

    #[test]
    fn test_disjoint_styles() {
        let out = ser(&[
            (Markdown::BOLD, "a"),
            (Markdown::CODE, "b"),
            (Markdown::ITALIC, "c"),
        ]);
        assert_eq!(out, "**a**`b`_c_");
    }

    #[test]
    fn test_repeated_style_continues_scope() {
        let out = ser(&[(Markdown::BOLD, "He"), (Markdown::BOLD, "llo")]);
        assert_eq!(out, "**Hello**");
    }

    #[test]
    fn test_none_opens_and_closes_silently() {
        let out = ser(&[
            (Markdown::NONE, "a"),
            (Markdown::ITALIC, "b"),
            (Markdown::NONE, "c"),
        ]);
        assert_eq!(out, "a_b_c");
    }

    #[test]
    fn test_styled_text() {
        let text = StyledText::from_runs([
            (Markdown::HEADER1, "Notes"),
            (Markdown::NONE, "\nUse "),
            (Markdown::CODE, "cargo"),
            (Markdown::NONE, " with "),
            (Markdown::BOLD, "care"),
        ]);
        assert_eq!(serialize(&text), "# Notes\nUse `cargo` with **care**");
    }
}
