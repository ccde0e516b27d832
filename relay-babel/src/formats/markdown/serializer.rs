//! Markdown export (runs → markup)
//!
//! Runs are flattened into style events and each event maps to one delimiter.
//! Colors survive only as spoilers; every other color is dropped.

use super::MarkdownOptions;
use crate::common::transitions::runs_to_events;
use crate::ir::events::{Event, Style};
use crate::ir::nodes::StyledText;

fn delimiter(style: Style) -> &'static str {
    match style {
        Style::Italic => "*",
        Style::Bold => "**",
        Style::Underline => "__",
        Style::Strikethrough => "~~",
        Style::Monospace => "`",
        Style::Spoiler => "||",
    }
}

/// Serialize runs into markdown.
pub fn serialize_to_markdown(doc: &StyledText, options: &MarkdownOptions) -> String {
    let mut out = String::new();

    for event in runs_to_events(&doc.runs) {
        match event {
            Event::Open(style) | Event::Close(style) => out.push_str(delimiter(style)),
            Event::Text(text) if options.escape_asterisks => {
                out.push_str(&text.replace('*', "\\*"))
            }
            Event::Text(text) => out.push_str(&text),
        }
    }

    out
}
