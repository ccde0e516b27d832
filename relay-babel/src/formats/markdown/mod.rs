//! Discord markdown format
//!
//! Bidirectional conversion between runs and the markdown subset chat clients
//! render.
//!
//! # Element Mapping Table
//!
//! | Run attribute           | Markdown          | Export Notes                 | Import Notes                     |
//! |-------------------------|-------------------|------------------------------|----------------------------------|
//! | bold                    | `**text**`        | Direct                       | Direct                           |
//! | italic / reverse        | `*text*`          | Reverse video → italic       | Also `_text_` when not in a URL  |
//! | underline               | `__text__`        | Direct                       | Direct                           |
//! | strikethrough           | `~~text~~`        | Direct                       | Direct                           |
//! | monospace               | `` `text` ``      | Direct                       | Not imported (left as text)      |
//! | foreground == background| `\|\|text\|\|`    | Spoiler                      | Not imported (left as text)      |
//! | other colors            | (none)            | Dropped                      | Never produced                   |
//! | custom emoji            | `<:name:id>`      | n/a                          | Reduced to `:name:`              |
//!
//! # Lossy Conversions
//!
//! - Colors other than the spoiler convention are dropped on export.
//! - Reverse video exports as italics and imports as plain italics.
//! - Delimiters never cross a line break on import.
//!
//! # Architecture Notes
//!
//! Export walks the flat event stream from `common::transitions`, so opening
//! and closing order is decided in one place. Import rewrites delimiters into
//! control codes with a fixed pipeline of regex passes and then reuses the IRC
//! parser to build runs.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::{bool_option, Format};
use crate::ir::nodes::StyledText;
use std::collections::HashMap;

/// Knobs shared by the markdown parser and serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Escape literal `*` in text as `\*` on export.
    pub escape_asterisks: bool,
    /// Treat `_text_` as italics on import.
    pub underscore_italics: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        MarkdownOptions {
            escape_asterisks: false,
            underscore_italics: true,
        }
    }
}

impl MarkdownOptions {
    /// Applies `--extra-*` style overrides on top of these options.
    pub fn with_overrides(mut self, options: &HashMap<String, String>) -> Result<Self, FormatError> {
        for key in options.keys() {
            match key.as_str() {
                "escape-asterisks" | "underscore-italics" => {}
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'markdown' has no option '{other}'"
                    )))
                }
            }
        }
        if let Some(value) = bool_option(options, "escape-asterisks")? {
            self.escape_asterisks = value;
        }
        if let Some(value) = bool_option(options, "underscore-italics")? {
            self.underscore_italics = value;
        }
        Ok(self)
    }
}

/// Format implementation for Discord markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    options: MarkdownOptions,
}

impl MarkdownFormat {
    pub fn with_options(options: MarkdownOptions) -> Self {
        MarkdownFormat { options }
    }

    pub fn options(&self) -> MarkdownOptions {
        self.options
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Discord chat markdown"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<StyledText, FormatError> {
        Ok(parser::parse_from_markdown(source, &self.options))
    }

    fn serialize(&self, doc: &StyledText) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_markdown(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &StyledText,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let options = self.options.with_overrides(options)?;
        Ok(serializer::serialize_to_markdown(doc, &options))
    }
}
