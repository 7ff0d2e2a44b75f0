//! Markdown syntax to styled runs
//!
//! Each atomic style has a [`Matcher`]. Matchers run one after another over
//! a working copy of the text; every accepted match has its markers removed
//! and its style added to the characters between them. Whatever no matcher
//! claims stays plain.

use tracing::{debug, trace};

use super::flags::Markdown;
use super::rules::{DelimitedMatch, Matcher};
use super::syntax::default_pattern;
use crate::config::Config;
use crate::error::Result;
use crate::text::StyledText;

/// Converts markdown syntax into styled text
#[derive(Debug, Clone)]
pub struct SyntaxDeserializer {
    matchers: Vec<Matcher>,
}

impl SyntaxDeserializer {
    /// Order in which matchers run.
    ///
    /// Code runs before bold and italic so markers inside a code span stay
    /// literal.
    pub const ORDER: [Markdown; 6] = [
        Markdown::HEADER1,
        Markdown::HEADER2,
        Markdown::HEADER3,
        Markdown::CODE,
        Markdown::BOLD,
        Markdown::ITALIC,
    ];

    /// Build with the built-in patterns
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    /// Build with any pattern overrides from the config
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_patterns(|markdown| config.pattern(markdown))
    }

    /// Build with patterns chosen per style; `None` falls back to the built-in one.
    ///
    /// Fails on the first pattern that does not compile.
    pub fn with_patterns<'a>(
        mut pattern_for: impl FnMut(Markdown) -> Option<&'a str>,
    ) -> Result<Self> {
        let mut matchers = Vec::with_capacity(Self::ORDER.len());
        for markdown in Self::ORDER {
            let pattern = match pattern_for(markdown).or_else(|| default_pattern(markdown)) {
                Some(pattern) => pattern,
                None => continue,
            };
            let name = markdown.name().unwrap_or("unnamed");
            matchers.push(Matcher::new(name, markdown, pattern)?);
        }
        Ok(Self { matchers })
    }

    /// Parse syntax text into styled text.
    ///
    /// Never fails: unterminated or badly nested markers are left in the
    /// text as plain characters.
    pub fn deserialize(&self, syntax: &str) -> StyledText {
        let mut working = Working::new(syntax);
        for matcher in &self.matchers {
            working.apply(matcher);
        }
        let styled = working.into_styled_text();
        debug!(
            input_len = syntax.len(),
            runs = styled.runs().len(),
            "deserialized markdown"
        );
        styled
    }
}

/// Text being parsed, with a style per byte
struct Working {
    text: String,
    styles: Vec<Markdown>,
}

impl Working {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            styles: vec![Markdown::NONE; text.len()],
        }
    }

    fn apply(&mut self, matcher: &Matcher) {
        let matches = matcher.find_all(&self.text);
        if matches.is_empty() {
            return;
        }

        let mut text = String::with_capacity(self.text.len());
        let mut styles = Vec::with_capacity(self.styles.len());
        let mut last = 0;

        for m in matches {
            if !self.accepts(&m, matcher.markdown) {
                trace!(rule = %matcher.name, start = m.open.start, "skipping match");
                continue;
            }
            trace!(rule = %matcher.name, start = m.open.start, "applying match");

            text.push_str(&self.text[last..m.open.start]);
            styles.extend_from_slice(&self.styles[last..m.open.start]);

            text.push_str(&self.text[m.content.clone()]);
            styles.extend(
                self.styles[m.content.clone()]
                    .iter()
                    .map(|style| style.union(matcher.markdown)),
            );

            last = m.span().end;
        }

        text.push_str(&self.text[last..]);
        styles.extend_from_slice(&self.styles[last..]);

        self.text = text;
        self.styles = styles;
    }

    /// A match is taken only if it nests properly inside what earlier
    /// matchers found and leaves every character with a valid style.
    fn accepts(&self, m: &DelimitedMatch, markdown: Markdown) -> bool {
        let mut markers = self.styles[m.open.clone()]
            .iter()
            .chain(self.styles[m.close.clone()].iter());

        let scope = match markers.next() {
            Some(first) => *first,
            None => self
                .styles
                .get(m.content.start)
                .copied()
                .unwrap_or(Markdown::NONE),
        };

        markers.all(|style| *style == scope)
            && self.styles[m.content.clone()]
                .iter()
                .all(|style| style.contains(scope) && style.union(markdown).is_valid())
    }

    fn into_styled_text(self) -> StyledText {
        let mut styled = StyledText::new();
        let mut run_start = 0;
        let mut current = None;

        for (idx, _) in self.text.char_indices() {
            let style = self.styles[idx];
            match current {
                Some(open) if open == style => {}
                Some(open) => {
                    styled.push(open, &self.text[run_start..idx]);
                    run_start = idx;
                    current = Some(style);
                }
                None => current = Some(style),
            }
        }
        if let Some(open) = current {
            styled.push(open, &self.text[run_start..]);
        }
        styled
    }
}
