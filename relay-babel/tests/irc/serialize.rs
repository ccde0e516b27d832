//! Export tests for the IRC format (runs → control codes)

use relay_babel::format::Format;
use relay_babel::formats::irc::IrcFormat;
use relay_babel::formats::markdown::MarkdownFormat;

fn markdown_to_irc(source: &str) -> String {
    let doc = MarkdownFormat::default().parse(source).unwrap();
    IrcFormat.serialize(&doc).unwrap()
}

#[test]
fn test_markdown_to_control_codes() {
    assert_eq!(markdown_to_irc("**Hello** *world*"), "\x02Hello\x02 \x1Dworld\x1D");
}

#[test]
fn test_nested_markdown() {
    assert_eq!(markdown_to_irc("***x***"), "\x02\x1Dx\x02\x1D");
}

#[test]
fn test_reparse_is_stable() {
    let source = "\x02a\x0304,05b\x16c\x0Fd \x1Fe\x1F";
    let doc = IrcFormat.parse(source).unwrap();
    let once = IrcFormat.serialize(&doc).unwrap();
    let twice = IrcFormat.serialize(&IrcFormat.parse(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
    assert_eq!(IrcFormat.parse(&once).unwrap(), doc);
}
