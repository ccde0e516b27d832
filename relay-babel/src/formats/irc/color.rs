//! Color directives and palette helpers
//!
//! A color directive is the color byte (0x03) optionally followed by a
//! foreground of one or two decimal digits and, after a comma, a background of
//! one or two digits. A comma that is not followed by a digit is not part of
//! the directive.

use super::COLOR;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

// ASCII digits only: `\d` would also accept other Unicode digits.
static COLOR_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x03([0-9][0-9]?)?(?:,([0-9][0-9]?))?").expect("valid regex"));

/// Highest palette index a two-digit directive can carry.
pub const MAX_DIRECTIVE_INDEX: u8 = 99;

/// A decoded color directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDirective {
    pub foreground: Option<u8>,
    pub background: Option<u8>,
    /// Bytes consumed, including the color byte itself.
    pub str_size: usize,
}

impl ColorDirective {
    /// A color byte with no parameters: clears both colors.
    pub const BARE: ColorDirective = ColorDirective {
        foreground: None,
        background: None,
        str_size: 1,
    };

    /// Bytes consumed after the color byte (`"01,02"` is 5).
    pub fn span(&self) -> usize {
        self.str_size.saturating_sub(1)
    }
}

/// Scans `text` once and maps the byte offset of every color byte to its directive.
pub fn scan_color_directives(text: &str) -> HashMap<usize, ColorDirective> {
    COLOR_DIRECTIVE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = |group: usize| caps.get(group).and_then(|m| m.as_str().parse().ok());
            Some((
                whole.start(),
                ColorDirective {
                    foreground: number(1),
                    background: number(2),
                    str_size: whole.len(),
                },
            ))
        })
        .collect()
}

/// Encodes a directive setting both colors, using two digits per index.
///
/// Indices above [`MAX_DIRECTIVE_INDEX`] are clamped since the grammar cannot
/// carry them.
pub fn encode_directive(foreground: Option<u8>, background: Option<u8>) -> String {
    let clamp = |index: u8| index.min(MAX_DIRECTIVE_INDEX);
    match (foreground.map(clamp), background.map(clamp)) {
        (None, None) => COLOR.to_string(),
        (Some(fg), None) => format!("{COLOR}{fg:02}"),
        (None, Some(bg)) => format!("{COLOR},{bg:02}"),
        (Some(fg), Some(bg)) => format!("{COLOR}{fg:02},{bg:02}"),
    }
}

/// Whether `text` placed right after `encode_directive(foreground, background)`
/// would be read back as part of the directive.
pub fn text_extends_directive(
    foreground: Option<u8>,
    background: Option<u8>,
    text: &str,
) -> bool {
    let mut chars = text.chars();
    let first = chars.next();
    let second = chars.next();
    let comma_digit = first == Some(',') && second.is_some_and(|c| c.is_ascii_digit());

    match (foreground, background) {
        (_, Some(_)) => false,
        (Some(_), None) => comma_digit,
        (None, None) => first.is_some_and(|c| c.is_ascii_digit()) || comma_digit,
    }
}

/// Reduces one 8-bit channel to one of six levels (0..=5).
fn channel_level(value: u8) -> u8 {
    value / 43
}

/// Quantizes an RGB color to an index of the 6×6×6 color cube (0..=215).
pub fn quantize_rgb(red: u8, green: u8, blue: u8) -> u8 {
    36 * channel_level(red) + 6 * channel_level(green) + channel_level(blue)
}

/// [`quantize_rgb`] for a packed `0xRRGGBB` value, as chat services report role colors.
pub fn quantize_hex(rgb: u32) -> u8 {
    let [_, red, green, blue] = rgb.to_be_bytes();
    quantize_rgb(red, green, blue)
}
