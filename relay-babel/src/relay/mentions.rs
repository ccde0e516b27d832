//! Mention translation in both directions
//!
//! Discord encodes mentions as ids (`<@123>`, `<@&456>`, `<#789>`) which mean
//! nothing on IRC, and IRC users address each other by bare nick (`alice:`,
//! `@alice`) which Discord will not ping. Both directions resolve names through
//! a [`Directory`]; anything it cannot resolve is left as written.

use crate::formats::irc::color::{encode_directive, quantize_hex, MAX_DIRECTIVE_INDEX};
use crate::formats::irc::COLOR;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static USER_MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"<@!?([0-9]+)>").expect("valid regex"));
static ROLE_MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"<@&([0-9]+)>").expect("valid regex"));
static CHANNEL_MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"<#([0-9]+)>").expect("valid regex"));

/// A Discord role as far as mentions are concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub name: String,
    /// Packed `0xRRGGBB`; `None` for roles without a color.
    pub color: Option<u32>,
}

/// Name lookups against the Discord side of the relay.
pub trait Directory {
    fn user_name(&self, id: u64) -> Option<&str>;

    fn role(&self, id: u64) -> Option<&Role>;

    fn channel_name(&self, id: u64) -> Option<&str>;

    /// Finds a user by username, ignoring case.
    fn user_id_by_name(&self, name: &str) -> Option<u64>;
}

/// A [`Directory`] backed by in-memory maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectory {
    users: HashMap<u64, String>,
    roles: HashMap<u64, Role>,
    channels: HashMap<u64, String>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, id: u64, name: impl Into<String>) -> Self {
        self.users.insert(id, name.into());
        self
    }

    pub fn with_role(mut self, id: u64, name: impl Into<String>, color: Option<u32>) -> Self {
        self.roles.insert(
            id,
            Role {
                name: name.into(),
                color,
            },
        );
        self
    }

    pub fn with_channel(mut self, id: u64, name: impl Into<String>) -> Self {
        self.channels.insert(id, name.into());
        self
    }
}

impl Directory for MemoryDirectory {
    fn user_name(&self, id: u64) -> Option<&str> {
        self.users.get(&id).map(String::as_str)
    }

    fn role(&self, id: u64) -> Option<&Role> {
        self.roles.get(&id)
    }

    fn channel_name(&self, id: u64) -> Option<&str> {
        self.channels.get(&id).map(String::as_str)
    }

    fn user_id_by_name(&self, name: &str) -> Option<u64> {
        let wanted = name.to_lowercase();
        self.users
            .iter()
            .find(|(_, username)| username.to_lowercase() == wanted)
            .map(|(id, _)| *id)
    }
}

fn mention_id(caps: &Captures) -> Option<u64> {
    caps.get(1)?.as_str().parse().ok()
}

fn resolve_each<F>(regex: &Regex, text: &str, resolve: F) -> String
where
    F: Fn(u64) -> Option<String>,
{
    regex
        .replace_all(text, |caps: &Captures| {
            match mention_id(caps).and_then(&resolve) {
                Some(replacement) => replacement,
                None => {
                    tracing::trace!(mention = &caps[0], "unresolved mention left as is");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// `@role` wrapped in a foreground directive, when the role has a color that
/// fits the directive grammar.
fn role_mention(role: &Role, tint: bool) -> String {
    match role.color.map(quantize_hex) {
        Some(index) if tint && index <= MAX_DIRECTIVE_INDEX => {
            format!("{}@{}{COLOR}", encode_directive(Some(index), None), role.name)
        }
        _ => format!("@{}", role.name),
    }
}

/// Replace Discord user, role and channel mentions with readable names.
pub fn replace_discord_mentions(text: &str, directory: &dyn Directory, tint_roles: bool) -> String {
    let text = resolve_each(&USER_MENTION, text, |id| {
        directory.user_name(id).map(|name| format!("@{name}"))
    });
    let text = resolve_each(&ROLE_MENTION, &text, |id| {
        directory.role(id).map(|role| role_mention(role, tint_roles))
    });
    resolve_each(&CHANNEL_MENTION, &text, |id| {
        directory.channel_name(id).map(|name| format!("#{name}"))
    })
}

fn is_mention_punctuation(c: char) -> bool {
    matches!(c, '@' | ':' | ',')
}

/// Turn IRC-style addressing into Discord mentions.
///
/// Words starting with `@` or ending with `:` are candidates. A candidate whose
/// name matches a Discord user becomes `<@id>`, keeping any trailing `:` or
/// `,`. `@everyone` and `@here` are wrapped in backticks when
/// `escape_mass_mentions` is set so they cannot ping a whole server.
pub fn rewrite_irc_mentions(
    text: &str,
    directory: &dyn Directory,
    escape_mass_mentions: bool,
) -> String {
    text.split(' ')
        .map(|word| rewrite_word(word, directory, escape_mass_mentions))
        .collect::<Vec<_>>()
        .join(" ")
}

fn rewrite_word(word: &str, directory: &dyn Directory, escape_mass_mentions: bool) -> String {
    if !(word.starts_with('@') || word.ends_with(':')) {
        return word.to_string();
    }

    let lower = word.to_lowercase();
    if lower.starts_with("@everyone") || lower.starts_with("@here") {
        return if escape_mass_mentions {
            format!("`{word}`")
        } else {
            word.to_string()
        };
    }

    let name = lower.trim_matches(is_mention_punctuation);
    if name.is_empty() {
        return word.to_string();
    }

    match directory.user_id_by_name(name) {
        Some(id) => {
            let kept = word.trim_end_matches(is_mention_punctuation);
            format!("<@{id}>{}", &word[kept.len()..])
        }
        None => {
            tracing::trace!(word, "no Discord user for IRC mention");
            word.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> MemoryDirectory {
        MemoryDirectory::new()
            .with_user(1, "Alice")
            .with_user(2, "bob")
            .with_role(10, "mods", Some(0x00FF00))
            .with_role(11, "admins", Some(0xFF0000))
            .with_channel(20, "general")
    }

    #[test]
    fn discord_mentions_become_names() {
        let text = "<@1> <@!2> <@&10> <#20>";
        assert_eq!(
            replace_discord_mentions(text, &directory(), false),
            "@Alice @bob @mods #general"
        );
    }

    #[test]
    fn unknown_discord_mentions_are_kept() {
        let text = "<@99> <@&98> <#97>";
        assert_eq!(replace_discord_mentions(text, &directory(), false), text);
    }

    #[test]
    fn role_tint_only_for_small_indices() {
        // green quantizes to 30, red to 180
        assert_eq!(
            replace_discord_mentions("<@&10> <@&11>", &directory(), true),
            "\x0330@mods\x03 @admins"
        );
    }

    #[test]
    fn irc_addressing_becomes_discord_mentions() {
        assert_eq!(
            rewrite_irc_mentions("alice: hi @BOB, bye", &directory(), true),
            "<@1>: hi <@2>, bye"
        );
    }

    #[test]
    fn unknown_nicks_are_kept() {
        assert_eq!(
            rewrite_irc_mentions("note: @nobody", &directory(), true),
            "note: @nobody"
        );
    }

    #[test]
    fn mass_mentions_are_escaped() {
        assert_eq!(
            rewrite_irc_mentions("hey @everyone and @Here!", &directory(), true),
            "hey `@everyone` and `@Here!`"
        );
        assert_eq!(
            rewrite_irc_mentions("@everyone", &directory(), false),
            "@everyone"
        );
    }

    #[test]
    fn spacing_is_preserved() {
        assert_eq!(
            rewrite_irc_mentions("a  @alice ", &directory(), true),
            "a  <@1> "
        );
    }
}
