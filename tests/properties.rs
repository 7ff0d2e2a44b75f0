//! Property-based tests for the style model and syntax conversion
//!
//! Run content is limited to letters, digits and spaces so no generated
//! text contains marker characters of its own.

use proptest::prelude::*;

use mdtoggle::{
    serialize, ActiveStyleTracker, Markdown, StyleRegistry, StyledText, SyntaxDeserializer,
};

/// Styles that can sit inline next to each other
fn inline_style_strategy() -> impl Strategy<Value = Markdown> {
    prop_oneof![
        Just(Markdown::NONE),
        Just(Markdown::BOLD),
        Just(Markdown::ITALIC),
        Just(Markdown::BOLD_ITALIC),
        Just(Markdown::CODE),
    ]
}

fn header_strategy() -> impl Strategy<Value = Markdown> {
    prop_oneof![
        Just(Markdown::HEADER1),
        Just(Markdown::HEADER2),
        Just(Markdown::HEADER3),
    ]
}

fn valid_style_strategy() -> impl Strategy<Value = Markdown> {
    proptest::sample::select(Markdown::VALID_VALUES.to_vec())
}

fn any_style_strategy() -> impl Strategy<Value = Markdown> {
    (0u8..64).prop_map(Markdown::from_bits)
}

/// Generate a run of inline text
fn content_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 ]{0,8}"
}

fn inline_runs_strategy() -> impl Strategy<Value = Vec<(Markdown, String)>> {
    prop::collection::vec((inline_style_strategy(), content_strategy()), 0..8)
}

#[derive(Debug, Clone)]
enum Event {
    On(Markdown),
    Off(Markdown),
    Toggle(Markdown),
    Caret(usize),
    Reset,
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        any_style_strategy().prop_map(Event::On),
        any_style_strategy().prop_map(Event::Off),
        valid_style_strategy().prop_map(Event::Toggle),
        (0usize..20).prop_map(Event::Caret),
        Just(Event::Reset),
    ]
}

proptest! {
    #[test]
    fn prop_inline_roundtrip(runs in inline_runs_strategy()) {
        let text = StyledText::from_runs(runs.iter().map(|(s, t)| (*s, t.as_str())));
        let parser = SyntaxDeserializer::new().unwrap();

        let syntax = serialize(&text);
        prop_assert_eq!(parser.deserialize(&syntax), text);
    }

    #[test]
    fn prop_header_lines_roundtrip(
        lines in prop::collection::vec(
            (header_strategy(), content_strategy(), inline_runs_strategy()),
            1..5,
        )
    ) {
        // Each line: a header, then a line break followed by inline body text
        let mut text = StyledText::new();
        for (header, title, body) in &lines {
            text.push(*header, title.trim_start());
            text.push(Markdown::NONE, "\n");
            for (style, content) in body {
                text.push(*style, content);
            }
            text.push(Markdown::NONE, "\n");
        }

        let parser = SyntaxDeserializer::new().unwrap();
        prop_assert_eq!(parser.deserialize(&serialize(&text)), text);
    }

    #[test]
    fn prop_deserialize_never_yields_invalid_styles(syntax in "[a-z #*_`\n]{0,40}") {
        let parser = SyntaxDeserializer::new().unwrap();
        let styled = parser.deserialize(&syntax);

        let mut expected_start = 0;
        for run in styled.runs() {
            prop_assert!(run.style.is_valid());
            prop_assert_eq!(run.range.start, expected_start);
            prop_assert!(!run.range.is_empty());
            expected_start = run.range.end;
        }
        prop_assert_eq!(expected_start, styled.len_utf16());
    }

    #[test]
    fn prop_tracker_stays_valid(events in prop::collection::vec(event_strategy(), 0..30)) {
        let registry = StyleRegistry::default();
        let mut tracker = ActiveStyleTracker::new(&registry);
        let text = StyledText::from_runs([
            (Markdown::BOLD, "ab"),
            (Markdown::NONE, "cd"),
            (Markdown::HEADER2, "ef"),
            (Markdown::BOLD_ITALIC, "gh"),
        ]);

        for event in events {
            match event {
                Event::On(style) => { tracker.toggle_on(style); }
                Event::Off(style) => { tracker.toggle_off(style); }
                Event::Toggle(style) => { tracker.toggle(style); }
                Event::Caret(location) => { tracker.caret_moved(&text, location); }
                Event::Reset => tracker.reset(),
            }
            prop_assert!(tracker.active().is_valid());
            prop_assert_eq!(
                registry.style_for(tracker.typing_attributes()),
                tracker.active()
            );
        }
    }

    #[test]
    fn prop_serializer_branches_are_exhaustive(
        a in valid_style_strategy(),
        b in valid_style_strategy(),
    ) {
        let equal = a == b;
        let disjoint = a.is_disjoint(b);
        let partial = !a.subtract(b).is_empty() || !b.subtract(a).is_empty();
        // NONE is disjoint from everything, including itself
        prop_assert!(equal || disjoint || partial);
        if !equal && !disjoint {
            prop_assert!(partial);
        }
    }

    #[test]
    fn prop_attribute_lookup_is_idempotent(style in any_style_strategy()) {
        let registry = StyleRegistry::default();
        let attrs = registry.attributes_for(style);
        prop_assert_eq!(registry.attributes_for(registry.style_for(attrs)), attrs);
    }
}
