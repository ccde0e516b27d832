//! Message plumbing for an IRC ⇄ Discord relay
//!
//! The format modules only translate styling. A relay also has to rewrite
//! mentions, prefix messages with their author, keep lines under the IRC length
//! limit, drop ignored users and route between channels. These helpers do that
//! work without talking to either network: everything the relay knows about
//! the Discord side comes in through the [`mentions::Directory`] trait.
//!
//! ```text
//!     IRC → Discord:  irc::irc_to_discord, then mentions::rewrite_irc_mentions
//!     Discord → IRC:  discord::discord_to_irc, then outbound::irc_lines
//! ```

pub mod channels;
pub mod discord;
pub mod ignore;
pub mod irc;
pub mod mentions;
pub mod outbound;

pub use channels::ChannelMap;
pub use discord::{discord_to_irc, DiscordMessage};
pub use ignore::IgnoreList;
pub use irc::{irc_to_discord, IrcMessageKind};
pub use mentions::{rewrite_irc_mentions, Directory, MemoryDirectory, Role};
pub use outbound::{author_prefix, format_chunks, irc_lines, max_chunk_len, split_message, ReplyTarget};

/// IRC servers cut lines around 512 bytes; this leaves room for the prefix.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 400;

/// Behaviour switches for the relay helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayOptions {
    /// Escape `*` in relayed NOTICE text so Discord shows it literally.
    pub escape_notice_asterisks: bool,
    /// Color role mentions with the role's palette index when it fits a directive.
    pub tint_roles: bool,
    /// Wrap `@everyone` and `@here` from IRC in backticks.
    pub escape_mass_mentions: bool,
    /// Read `_text_` from Discord as italics.
    pub underscore_italics: bool,
    /// Upper bound for one IRC line, author prefix included.
    pub max_message_length: usize,
    /// Relay edited Discord messages, tagged ` (edited)`.
    pub include_edited: bool,
}

impl Default for RelayOptions {
    fn default() -> Self {
        RelayOptions {
            escape_notice_asterisks: true,
            tint_roles: false,
            escape_mass_mentions: true,
            underscore_italics: true,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            include_edited: false,
        }
    }
}
