//! Discord → IRC message conversion

use super::mentions::{replace_discord_mentions, Directory};
use super::RelayOptions;
use crate::formats::markdown::parser::markup_to_control_codes;
use crate::formats::markdown::MarkdownOptions;
use once_cell::sync::Lazy;
use regex::Regex;

static SLASH_COMMAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</([\w-]+):?[0-9]*>").expect("valid regex"));

/// The parts of a Discord message the relay forwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscordMessage {
    pub content: String,
    /// Attachment URLs, in upload order.
    pub attachments: Vec<String>,
}

impl DiscordMessage {
    pub fn new(content: impl Into<String>) -> Self {
        DiscordMessage {
            content: content.into(),
            attachments: Vec::new(),
        }
    }

    pub fn with_attachment(mut self, url: impl Into<String>) -> Self {
        self.attachments.push(url.into());
        self
    }
}

/// Convert a Discord message into IRC text.
///
/// Markup becomes control codes, mentions become names, attachment URLs are
/// appended one per line and slash-command tags (`</name:id>`) become `/name`.
/// The result may span several lines; see [`super::outbound::irc_lines`].
pub fn discord_to_irc(
    message: &DiscordMessage,
    directory: &dyn Directory,
    options: &RelayOptions,
) -> String {
    let markup = MarkdownOptions {
        underscore_italics: options.underscore_italics,
        ..MarkdownOptions::default()
    };
    let mut text = markup_to_control_codes(&message.content, &markup);
    text = replace_discord_mentions(&text, directory, options.tint_roles);

    if !message.attachments.is_empty() {
        text.push('\n');
        text.push_str(&message.attachments.join("\n"));
    }

    SLASH_COMMAND.replace_all(&text, "/${1}").into_owned()
}
