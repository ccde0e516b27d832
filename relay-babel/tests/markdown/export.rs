//! Export tests for the Markdown format (runs → markdown)

use insta::assert_snapshot;
use relay_babel::{irc_to_markdown, FormatRegistry};
use std::collections::HashMap;

#[test]
fn test_bold_and_italic() {
    assert_snapshot!(irc_to_markdown("\x02Hello\x02 \x1Dworld\x1D"), @"**Hello** *world*");
}

#[test]
fn test_underline_strike_monospace() {
    assert_snapshot!(irc_to_markdown("\x1Fu\x1F \x1Es\x1E \x11m\x11"), @"__u__ ~~s~~ `m`");
}

#[test]
fn test_overlapping_styles() {
    assert_snapshot!(irc_to_markdown("\x02a\x1Db\x02c\x1D"), @"**a*b**c*");
}

#[test]
fn test_spoiler() {
    assert_snapshot!(irc_to_markdown("see \x0305,05the end\x0F"), @"see ||the end||");
}

#[test]
fn test_reverse_is_italic() {
    assert_snapshot!(irc_to_markdown("\x16inverted\x0F"), @"*inverted*");
}

#[test]
fn test_colors_are_dropped() {
    assert_snapshot!(irc_to_markdown("\x0304red\x03 \x0312,02blue\x0F"), @"red blue");
}

#[test]
fn test_plain_text_is_unchanged() {
    assert_snapshot!(irc_to_markdown("nothing to see here"), @"nothing to see here");
}

#[test]
fn test_escape_asterisks_option() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("escape-asterisks".to_string(), "true".to_string());

    let out = registry
        .convert("2*3=6 \x02ok\x02", "irc", "markdown", &options)
        .unwrap();
    assert_snapshot!(out, @r"2\*3=6 **ok**");
}

#[test]
fn test_invalid_option_value() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("escape-asterisks".to_string(), "perhaps".to_string());

    let err = registry
        .convert("x", "irc", "markdown", &options)
        .unwrap_err();
    assert_snapshot!(err.to_string(), @"Invalid value 'perhaps' for option 'escape-asterisks'");
}
