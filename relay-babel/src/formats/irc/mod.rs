//! IRC control-code format
//!
//! IRC clients style text with single control bytes embedded in the message.
//! Five of them toggle an attribute, one introduces a color directive, one
//! swaps colors and one resets everything:
//!
//! | Byte | Meaning                                     |
//! |------|---------------------------------------------|
//! | 0x02 | bold                                        |
//! | 0x11 | monospace                                   |
//! | 0x1D | italic                                      |
//! | 0x1E | strikethrough                               |
//! | 0x1F | underline                                   |
//! | 0x03 | color, followed by optional `NN[,MM]`       |
//! | 0x16 | reverse video                               |
//! | 0x0F | reset                                       |
//!
//! Parsing never fails. Serialization emits the shortest toggle sequence
//! between neighbouring runs and falls back to reset when colors or reverse
//! video have to be cleared.

pub mod color;
pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{StyledText, Toggle};

pub const BOLD: char = '\x02';
pub const MONOSPACE: char = '\x11';
pub const ITALIC: char = '\x1D';
pub const STRIKETHROUGH: char = '\x1E';
pub const UNDERLINE: char = '\x1F';
pub const COLOR: char = '\x03';
pub const REVERSE: char = '\x16';
pub const RESET: char = '\x0F';

/// The control byte that flips `toggle`.
pub fn control_for(toggle: Toggle) -> char {
    match toggle {
        Toggle::Bold => BOLD,
        Toggle::Monospace => MONOSPACE,
        Toggle::Italic => ITALIC,
        Toggle::Strikethrough => STRIKETHROUGH,
        Toggle::Underline => UNDERLINE,
    }
}

/// Format implementation for IRC control codes
pub struct IrcFormat;

impl Format for IrcFormat {
    fn name(&self) -> &str {
        "irc"
    }

    fn description(&self) -> &str {
        "IRC control-code formatting"
    }

    fn file_extensions(&self) -> &[&str] {
        &["irc"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<StyledText, FormatError> {
        Ok(parser::parse_control_codes(source))
    }

    fn serialize(&self, doc: &StyledText) -> Result<String, FormatError> {
        Ok(serializer::serialize_to_control_codes(doc))
    }
}
