//! Shared configuration loader for the relay toolchain.
//!
//! `defaults/relay.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`RelayConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use relay_babel::formats::markdown::MarkdownOptions;
use relay_babel::relay::{ChannelMap, IgnoreList, RelayOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/relay.default.toml");

/// Top-level configuration consumed by relay applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    pub render: RenderConfig,
    pub mentions: MentionsConfig,
    pub markup: MarkupConfig,
    pub outbound: OutboundConfig,
    pub ignore: IgnoreConfig,
    #[serde(default)]
    pub channels: Vec<ChannelLink>,
}

/// IRC → Discord rendering knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub escape_notice_asterisks: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MentionsConfig {
    pub tint_roles: bool,
    pub escape_mass_mentions: bool,
}

/// Discord → IRC markup knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkupConfig {
    pub underscore_italics: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutboundConfig {
    pub max_message_length: usize,
    pub include_edited: bool,
}

/// Ignored names per network.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IgnoreConfig {
    #[serde(default)]
    pub irc: Vec<String>,
    #[serde(default)]
    pub discord: Vec<String>,
}

impl IgnoreConfig {
    pub fn irc_list(&self) -> IgnoreList {
        IgnoreList::new(&self.irc)
    }

    pub fn discord_list(&self) -> IgnoreList {
        IgnoreList::new(&self.discord)
    }
}

/// One IRC channel ⇄ Discord channel pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelLink {
    pub irc: String,
    pub discord: u64,
}

impl RelayConfig {
    pub fn channel_map(&self) -> ChannelMap {
        self.channels
            .iter()
            .map(|link| (link.irc.clone(), link.discord))
            .collect()
    }

    /// Options for the markdown format, for both directions.
    pub fn markdown_options(&self) -> MarkdownOptions {
        MarkdownOptions {
            escape_asterisks: false,
            underscore_italics: self.markup.underscore_italics,
        }
    }
}

impl From<&RelayConfig> for RelayOptions {
    fn from(config: &RelayConfig) -> Self {
        RelayOptions {
            escape_notice_asterisks: config.render.escape_notice_asterisks,
            tint_roles: config.mentions.tint_roles,
            escape_mass_mentions: config.mentions.escape_mass_mentions,
            underscore_italics: config.markup.underscore_italics,
            max_message_length: config.outbound.max_message_length,
            include_edited: config.outbound.include_edited,
        }
    }
}

impl From<RelayConfig> for RelayOptions {
    fn from(config: RelayConfig) -> Self {
        RelayOptions::from(&config)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RelayConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RelayConfig, ConfigError> {
    Loader::new().build()
}
