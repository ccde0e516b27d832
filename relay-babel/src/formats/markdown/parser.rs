//! Markdown import (markup → control codes → runs)
//!
//! Delimiters are rewritten into IRC control codes by a fixed pipeline of
//! regex passes, each one non-overlapping and lazy. The order matters: bold
//! runs before italics so `**` is never read as two italic markers, and the
//! underscore pass runs last so that `__` has already been taken by underline.
//!
//! Monospace and spoiler markup are not converted.

use super::MarkdownOptions;
use crate::formats::irc::parser::parse_control_codes;
use crate::ir::nodes::StyledText;
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static ITALIC_MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid regex"));
static UNDERLINE_MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").expect("valid regex"));
static STRIKE_MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.*?)~~").expect("valid regex"));
static CUSTOM_EMOJI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<a?(:[A-Za-z0-9_-]+:)[0-9]+>").expect("valid regex"));
static UNDERSCORE_MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.*?)_").expect("valid regex"));

/// Characters allowed right outside an `_italic_` span. Control bytes written
/// by the earlier passes are not among them.
const UNDERSCORE_DELIMITERS: &[char] = &[' ', '\t', '<', '>', '(', ')', '[', ']', '{', '}', '"', '\''];

/// Parse markdown into runs.
pub fn parse_from_markdown(source: &str, options: &MarkdownOptions) -> StyledText {
    parse_control_codes(&markup_to_control_codes(source, options))
}

/// Rewrite markdown delimiters into IRC control codes.
pub fn markup_to_control_codes(text: &str, options: &MarkdownOptions) -> String {
    let text = BOLD_MARKUP.replace_all(text, "\x02${1}\x02");
    let text = ITALIC_MARKUP.replace_all(&text, "\x1D${1}\x1D");
    let text = UNDERLINE_MARKUP.replace_all(&text, "\x1F${1}\x1F");
    let text = STRIKE_MARKUP.replace_all(&text, "\x1E${1}\x1E");
    let text = CUSTOM_EMOJI.replace_all(&text, "${1}");

    if options.underscore_italics {
        underscore_italics(&text)
    } else {
        text.into_owned()
    }
}

/// `_text_` becomes italic only when both neighbours of the span are
/// delimiters or string edges; anything else (`a_b_c.com`) is kept verbatim.
fn underscore_italics(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in UNDERSCORE_MARKUP.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let before = text[..whole.start()].chars().next_back();
        let after = text[whole.end()..].chars().next();

        out.push_str(&text[last..whole.start()]);
        if is_boundary(before) && is_boundary(after) {
            out.push('\x1D');
            out.push_str(caps.get(1).map_or("", |m| m.as_str()));
            out.push('\x1D');
        } else {
            out.push_str(whole.as_str());
        }
        last = whole.end();
    }

    out.push_str(&text[last..]);
    out
}

fn is_boundary(neighbour: Option<char>) -> bool {
    neighbour.map_or(true, |c| UNDERSCORE_DELIMITERS.contains(&c))
}
