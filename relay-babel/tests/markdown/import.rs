//! Import tests for the Markdown format (markdown → runs)

use crate::common::describe;
use insta::assert_snapshot;
use relay_babel::format::Format;
use relay_babel::formats::irc::parser::parse_control_codes;
use relay_babel::formats::markdown::MarkdownFormat;
use relay_babel::{irc_to_markdown, markdown_to_irc};

fn parse(source: &str) -> String {
    describe(&MarkdownFormat::default().parse(source).unwrap())
}

#[test]
fn test_bold_and_underscore_italic() {
    assert_snapshot!(parse("**bold** and _ital_"), @r#"
    bold "bold"
    plain " and "
    italic "ital"
    "#);
}

#[test]
fn test_strike_and_underline() {
    assert_snapshot!(parse("~~gone~~ __under__"), @r#"
    strike "gone"
    plain " "
    underline "under"
    "#);
}

#[test]
fn test_mixed_asterisks() {
    assert_snapshot!(parse("***a**b*"), @r#"
    bold italic "a"
    italic "b"
    "#);
}

#[test]
fn test_url_is_left_alone() {
    assert_snapshot!(parse("http://a_b_c.com/x"), @r#"plain "http://a_b_c.com/x""#);
    assert_eq!(markdown_to_irc("http://a_b_c.com/x"), "http://a_b_c.com/x");
}

#[test]
fn test_emoji_and_code() {
    assert_snapshot!(parse("`<:blob:1234>`"), @r#"plain "`:blob:`""#);
}

/// IRC → markdown → IRC keeps every style markdown can express.
#[test]
fn test_round_trip_examples() {
    let samples = [
        "\x02Hello\x02 \x1Dworld\x1D",
        "\x02a\x1Db\x02c\x1D",
        "\x1Da\x02b\x1Dc\x02",
        "\x02\x1Fa\x1F\x02 \x1Eb\x1E",
        "\x02\x1Dx\x1D\x02",
        "plain text",
    ];

    for sample in samples {
        let original = parse_control_codes(sample).normalized();
        let back = parse_control_codes(&markdown_to_irc(&irc_to_markdown(sample))).normalized();
        assert_eq!(back, original, "round trip of {sample:?}");
    }
}
