//! Markdown syntax markers
//!
//! The literal delimiters written around each style, and the patterns used
//! to find them again.

use super::flags::Markdown;

/// Prefix and suffix markers for one style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl Syntax {
    const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    pub const EMPTY: Syntax = Syntax::new("", "");
}

/// Markers for a style. Invalid combinations have no markers.
///
/// Header suffixes are empty: no line break is written after a header, so
/// the caller must keep a header's text on its own line.
pub fn syntax_for(markdown: Markdown) -> Syntax {
    match markdown {
        Markdown::HEADER1 => Syntax::new("# ", ""),
        Markdown::HEADER2 => Syntax::new("## ", ""),
        Markdown::HEADER3 => Syntax::new("### ", ""),
        Markdown::BOLD => Syntax::new("**", "**"),
        Markdown::ITALIC => Syntax::new("_", "_"),
        Markdown::BOLD_ITALIC => Syntax::new("**_", "_**"),
        Markdown::CODE => Syntax::new("`", "`"),
        _ => Syntax::EMPTY,
    }
}

// Group 1 is the opening marker, group 2 the content, group 3 the closing marker.
pub const HEADER1_PATTERN: &str = r"(?m)^(#{1}[\t ]+)(.*)$";
pub const HEADER2_PATTERN: &str = r"(?m)^(#{2}[\t ]+)(.*)$";
pub const HEADER3_PATTERN: &str = r"(?m)^(#{3}[\t ]+)(.*)$";
pub const BOLD_PATTERN: &str = r"(?s)(\*\*)(.+?)(\*\*)";
pub const ITALIC_PATTERN: &str = r"(?s)(_)(.+?)(_)";
pub const CODE_PATTERN: &str = r"(`)([^`]+)(`)";

/// Built-in pattern for an atomic style
pub fn default_pattern(markdown: Markdown) -> Option<&'static str> {
    let pattern = match markdown {
        Markdown::HEADER1 => HEADER1_PATTERN,
        Markdown::HEADER2 => HEADER2_PATTERN,
        Markdown::HEADER3 => HEADER3_PATTERN,
        Markdown::BOLD => BOLD_PATTERN,
        Markdown::ITALIC => ITALIC_PATTERN,
        Markdown::CODE => CODE_PATTERN,
        _ => return None,
    };
    Some(pattern)
}
