//! IRC channel ⇄ Discord channel routing

use std::collections::HashMap;

/// Bidirectional map between IRC channel names and Discord channel ids.
///
/// IRC channel names are matched case-insensitively; the spelling given at
/// insertion is what [`ChannelMap::irc_channel`] returns.
#[derive(Debug, Clone, Default)]
pub struct ChannelMap {
    by_irc: HashMap<String, u64>,
    by_discord: HashMap<u64, String>,
}

impl ChannelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links `irc` and `discord`, replacing any earlier link of either side.
    pub fn insert(&mut self, irc: impl Into<String>, discord: u64) {
        let irc = irc.into();
        let key = irc.to_lowercase();

        if let Some(old) = self.by_irc.remove(&key) {
            self.by_discord.remove(&old);
        }
        if let Some(old) = self.by_discord.remove(&discord) {
            self.by_irc.remove(&old.to_lowercase());
        }

        self.by_irc.insert(key, discord);
        self.by_discord.insert(discord, irc);
    }

    pub fn discord_channel(&self, irc: &str) -> Option<u64> {
        self.by_irc.get(&irc.to_lowercase()).copied()
    }

    pub fn irc_channel(&self, discord: u64) -> Option<&str> {
        self.by_discord.get(&discord).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_irc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_irc.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for ChannelMap {
    fn from_iter<T: IntoIterator<Item = (S, u64)>>(iter: T) -> Self {
        let mut map = ChannelMap::new();
        for (irc, discord) in iter {
            map.insert(irc, discord);
        }
        map
    }
}
