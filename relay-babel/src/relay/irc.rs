//! IRC → Discord message conversion

use super::RelayOptions;
use crate::formats::irc::parser::parse_control_codes;
use crate::formats::markdown::serializer::serialize_to_markdown;
use crate::formats::markdown::MarkdownOptions;

/// What kind of IRC line is being relayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrcMessageKind {
    Message,
    Notice,
    /// `/me` action
    Action,
}

/// Render one IRC line as a Discord message attributed to `nick`.
///
/// - message: `<nick> text`
/// - notice: `<nick> NOTICE: text`, with literal asterisks escaped
/// - action: `_**nick** text_`
pub fn irc_to_discord(nick: &str, text: &str, kind: IrcMessageKind, options: &RelayOptions) -> String {
    let markdown = MarkdownOptions {
        escape_asterisks: kind == IrcMessageKind::Notice && options.escape_notice_asterisks,
        ..MarkdownOptions::default()
    };
    let body = serialize_to_markdown(&parse_control_codes(text), &markdown);

    match kind {
        IrcMessageKind::Message => format!("<{nick}> {body}"),
        IrcMessageKind::Notice => format!("<{nick}> NOTICE: {body}"),
        IrcMessageKind::Action => format!("_**{nick}** {body}_"),
    }
}
