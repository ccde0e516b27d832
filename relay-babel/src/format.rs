//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing chat text into runs and serializing
//! runs back into chat text.

use crate::error::FormatError;
use crate::ir::nodes::StyledText;
use std::collections::HashMap;

/// Trait for chat text formats
///
/// Implementors provide conversion between a string representation and the run IR.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<StyledText, FormatError> {
///         Ok(StyledText::plain(source))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "irc", "markdown", "plain")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["irc"], ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → runs)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (runs → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into styled runs
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<StyledText, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize styled runs into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &StyledText) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize styled runs, optionally using extra parameters.
    ///
    /// Formats without knobs rely on the default implementation, which delegates to
    /// [`Format::serialize`] and rejects any parameter it is handed.
    fn serialize_with_options(
        &self,
        doc: &StyledText,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Reads a boolean knob out of a format option map.
///
/// Missing keys yield `None`; unrecognised values are reported as
/// [`FormatError::InvalidOption`].
pub fn bool_option(
    options: &HashMap<String, String>,
    key: &str,
) -> Result<Option<bool>, FormatError> {
    match options.get(key).map(|raw| raw.to_lowercase()) {
        None => Ok(None),
        Some(raw) => match raw.as_str() {
            "true" | "1" | "yes" | "y" => Ok(Some(true)),
            "false" | "0" | "no" | "n" => Ok(Some(false)),
            _ => Err(FormatError::InvalidOption {
                key: key.to_string(),
                value: raw,
            }),
        },
    }
}
