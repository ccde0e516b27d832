//! Property tests over arbitrary control-code input and run sequences.

use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;
use relay_babel::common::transitions::runs_to_events;
use relay_babel::formats::irc::parser::parse_control_codes;
use relay_babel::formats::irc::serializer::serialize_to_control_codes;
use relay_babel::ir::events::{Event, Style};
use relay_babel::formats::markdown::serializer::serialize_to_markdown;
use relay_babel::formats::markdown::MarkdownOptions;
use relay_babel::ir::nodes::{Run, StyledText};
use relay_babel::{irc_to_markdown, markdown_to_irc};

static CONTROL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x03([0-9][0-9]?)?(?:,([0-9][0-9]?))?|[\x02\x0F\x11\x16\x1D\x1E\x1F]").unwrap()
});

fn arb_run() -> impl Strategy<Value = Run> {
    (
        "[a-z0-9, ]{1,6}",
        any::<[bool; 6]>(),
        proptest::option::of(0u8..100),
        proptest::option::of(0u8..100),
    )
        .prop_map(|(text, flags, foreground, background)| Run {
            text,
            bold: flags[0],
            italic: flags[1],
            underline: flags[2],
            strikethrough: flags[3],
            monospace: flags[4],
            reverse: flags[5],
            foreground,
            background,
        })
}

/// Runs carrying only the styles markdown can write and read back, over text
/// free of markup characters.
fn arb_markup_run() -> impl Strategy<Value = Run> {
    ("[a-z0-9 ]{1,6}", any::<[bool; 4]>()).prop_map(|(text, flags)| Run {
        text,
        bold: flags[0],
        italic: flags[1],
        underline: flags[2],
        strikethrough: flags[3],
        ..Run::default()
    })
}

/// How many times `active` switches on along `runs`.
fn segments(runs: &[Run], active: impl Fn(&Run) -> bool) -> usize {
    let mut previous = false;
    let mut count = 0;
    for run in runs {
        let current = active(run);
        if current && !previous {
            count += 1;
        }
        previous = current;
    }
    count
}

proptest! {
    /// Parsing never panics and keeps exactly the non-control text.
    #[test]
    fn parse_keeps_all_text(s in r"[a-z0-9, \x02\x03\x0F\x11\x16\x1D\x1E\x1F]{0,60}") {
        let doc = parse_control_codes(&s);
        prop_assert_eq!(doc.plain_text(), CONTROL.replace_all(&s, "").into_owned());
        prop_assert!(doc.runs.iter().all(|run| !run.text.is_empty()));
    }

    /// Arbitrary bytes, including non-ASCII text, never panic.
    #[test]
    fn parse_is_total(s in any::<String>()) {
        let _ = parse_control_codes(&s);
        let _ = irc_to_markdown(&s);
        let _ = markdown_to_irc(&s);
    }

    /// Every opened style is closed, and never opened twice in a row.
    #[test]
    fn events_are_balanced(runs in proptest::collection::vec(arb_run(), 0..12)) {
        for style in Style::OPEN_ORDER {
            let mut open = false;
            for event in runs_to_events(&runs) {
                match event {
                    Event::Open(s) if s == style => {
                        prop_assert!(!open);
                        open = true;
                    }
                    Event::Close(s) if s == style => {
                        prop_assert!(open);
                        open = false;
                    }
                    _ => {}
                }
            }
            prop_assert!(!open);
        }
    }

    /// Serialized control codes read back as the same runs.
    #[test]
    fn irc_round_trip(runs in proptest::collection::vec(arb_run(), 0..12)) {
        let doc = StyledText::new(runs);
        let text = serialize_to_control_codes(&doc);
        prop_assert_eq!(parse_control_codes(&text).normalized(), doc.normalized());
    }

    /// Text without any markup or control bytes is left alone both ways.
    #[test]
    fn plain_text_is_a_fixed_point(s in "[A-Za-z0-9 .,!?]{0,50}") {
        prop_assert_eq!(irc_to_markdown(&s), s.clone());
        prop_assert_eq!(markdown_to_irc(&s), s);
    }

    /// Runs → markdown → control codes → runs keeps every markdown style.
    #[test]
    fn markdown_round_trip(runs in proptest::collection::vec(arb_markup_run(), 0..8)) {
        let doc = StyledText::new(runs);
        let markdown = serialize_to_markdown(&doc, &MarkdownOptions::default());
        let back = parse_control_codes(&markdown_to_irc(&markdown));
        prop_assert_eq!(back.normalized(), doc.normalized());
    }

    /// Every delimiter written for a style has a matching closing delimiter.
    #[test]
    fn rendered_delimiters_come_in_pairs(runs in proptest::collection::vec(arb_markup_run(), 0..8)) {
        let markdown = serialize_to_markdown(&StyledText::new(runs.clone()), &MarkdownOptions::default());

        let bold = segments(&runs, |run| run.bold);
        let italic = segments(&runs, |run| run.italic);
        prop_assert_eq!(markdown.matches('*').count(), 4 * bold + 2 * italic);
        prop_assert_eq!(markdown.matches("__").count(), 2 * segments(&runs, |run| run.underline));
        prop_assert_eq!(markdown.matches("~~").count(), 2 * segments(&runs, |run| run.strikethrough));
    }
}
