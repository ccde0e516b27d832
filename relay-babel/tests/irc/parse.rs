//! Import tests for the IRC format (control codes → runs)

use crate::common::describe;
use insta::assert_snapshot;
use relay_babel::format::Format;
use relay_babel::formats::irc::IrcFormat;

fn parse(text: &str) -> String {
    describe(&IrcFormat.parse(text).unwrap())
}

#[test]
fn test_mixed_styles() {
    assert_snapshot!(parse("\x02bold\x02 \x0304,01red \x16rev\x0F end"), @r#"
    bold "bold"
    plain " "
    fg=4 bg=1 "red "
    reverse fg=1 bg=4 "rev"
    plain " end"
    "#);
}

#[test]
fn test_color_directive_with_background() {
    assert_snapshot!(parse("\x0301,02text"), @r#"fg=1 bg=2 "text""#);
}

#[test]
fn test_bare_color_byte() {
    assert_snapshot!(parse("\x03text"), @r#"plain "text""#);
}

#[test]
fn test_reverse_without_colors() {
    assert_snapshot!(parse("\x16x"), @r#"reverse fg=0 "x""#);
}

#[test]
fn test_all_toggles_nest() {
    assert_snapshot!(parse("\x02a\x1Db\x1Fc\x1Ed\x11e\x0Ff"), @r#"
    bold "a"
    bold italic "b"
    bold italic underline "c"
    bold italic underline strike "d"
    bold italic underline strike mono "e"
    plain "f"
    "#);
}

#[test]
fn test_digits_after_directive() {
    // two digits at most per color
    assert_snapshot!(parse("\x031234,567"), @r#"fg=12 "34,567""#);
    assert_snapshot!(parse("\x0312,3456"), @r#"fg=12 bg=34 "56""#);
}

#[test]
fn test_truncated_input() {
    assert_snapshot!(parse("\x02"), @"");
    assert_snapshot!(parse("end\x03"), @r#"plain "end""#);
    assert_snapshot!(parse("end\x03,"), @r#"
    plain "end"
    plain ","
    "#);
}
