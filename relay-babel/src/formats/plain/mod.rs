//! Plain text format
//!
//! Serialization drops every attribute and keeps the text, which is what a
//! relay sends to clients that render neither control codes nor markup.
//! Parsing yields a single unstyled run.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::StyledText;

/// Format implementation for unstyled text
pub struct PlainFormat;

impl Format for PlainFormat {
    fn name(&self) -> &str {
        "plain"
    }

    fn description(&self) -> &str {
        "Unformatted text"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<StyledText, FormatError> {
        Ok(StyledText::plain(source))
    }

    fn serialize(&self, doc: &StyledText) -> Result<String, FormatError> {
        Ok(doc.plain_text())
    }
}
