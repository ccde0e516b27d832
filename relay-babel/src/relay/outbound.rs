//! Outbound IRC lines: author prefixes and chunking
//!
//! A Discord message can be arbitrarily long and span several lines, while an
//! IRC line cannot. Messages are split on line breaks, blank lines dropped, and
//! long lines cut into pieces that fit next to the author prefix. When more
//! than one piece is sent each is numbered `[i/n]`.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("valid regex"));

/// Room kept for the separators and `[i/n]` counter around a chunk.
const PREFIX_OVERHEAD: usize = 5;

/// Whom a Discord message replies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTarget<'a> {
    /// A regular Discord user.
    User(&'a str),
    /// A message the relay itself posted; the original IRC nick is recovered
    /// from its leading `<nick>` token.
    RelayBot { content: &'a str },
}

/// `<author>`, `<author, replying to other>`, plus ` (edited)` for edits.
pub fn author_prefix(author: &str, reply: Option<ReplyTarget<'_>>, edited: bool) -> String {
    let replied_to = match reply {
        Some(ReplyTarget::User(name)) => Some(name),
        Some(ReplyTarget::RelayBot { content }) => relayed_nick(content),
        None => None,
    };

    let mut prefix = match replied_to {
        Some(other) => format!("<{author}, replying to {other}>"),
        None => format!("<{author}>"),
    };
    if edited {
        prefix.push_str(" (edited)");
    }
    prefix
}

fn relayed_nick(content: &str) -> Option<&str> {
    let mut words = content.split(' ');
    let first = words.next()?;
    words.next()?;
    first.strip_prefix('<')?.strip_suffix('>')
}

/// Chunk size left for message text once `author` and the counter are added.
///
/// Counted in characters, like the chunks themselves.
pub fn max_chunk_len(author: &str, max_message_length: usize) -> usize {
    max_message_length.saturating_sub(author.chars().count() + PREFIX_OVERHEAD)
}

/// Split `text` into non-blank lines of at most `max` characters.
///
/// A `max` of zero disables splitting and returns the text unchanged.
pub fn split_message(text: &str, max: usize) -> Vec<String> {
    if max == 0 {
        return vec![text.to_string()];
    }

    let mut parts = Vec::new();
    for line in LINE_BREAK.split(text) {
        if line.trim().is_empty() {
            continue;
        }

        let chars: Vec<char> = line.chars().collect();
        if chars.len() <= max {
            parts.push(line.to_string());
        } else {
            parts.extend(chars.chunks(max).map(|chunk| chunk.iter().collect::<String>()));
        }
    }
    parts
}

/// Prefix every chunk with `author`, numbering them when there is more than one.
pub fn format_chunks(author: &str, chunks: &[String]) -> Vec<String> {
    let total = chunks.len();
    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            if total > 1 {
                format!("{author} [{}/{total}] {chunk}", i + 1)
            } else {
                format!("{author} {chunk}")
            }
        })
        .collect()
}

/// The IRC lines to send for `text` posted by `author`.
///
/// Every line is free of line breaks, even when the prefix leaves no room.
pub fn irc_lines(author: &str, text: &str, max_message_length: usize) -> Vec<String> {
    let max = max_chunk_len(author, max_message_length).max(1);
    let chunks = split_message(text, max);
    tracing::debug!(author, max, chunks = chunks.len(), "split outbound message");
    format_chunks(author, &chunks)
}
