//! IRC control-code parsing (control codes → runs)
//!
//! The scan is a small state machine: every recognized control byte closes the
//! pending run and derives the next state from the previous one. Toggles flip
//! one attribute, the color byte installs the colors of its directive (looked
//! up in a table built by one regex pass over the whole input), reverse swaps
//! colors, and reset returns to the unstyled default.
//!
//! A reset byte is appended to the input so the last pending run is flushed by
//! the same code path as every other one.

use super::color::{scan_color_directives, ColorDirective};
use super::{BOLD, COLOR, ITALIC, MONOSPACE, RESET, REVERSE, STRIKETHROUGH, UNDERLINE};
use crate::ir::nodes::{Run, StyledText, Toggle};

/// Parse IRC control-coded text into runs.
///
/// Total over all inputs: unknown bytes are text, and malformed or truncated
/// directives degrade to the bare color byte.
pub fn parse_control_codes(text: &str) -> StyledText {
    let directives = scan_color_directives(text);

    let mut source = String::with_capacity(text.len() + 1);
    source.push_str(text);
    source.push(RESET);

    let mut runs = Vec::new();
    let mut prev = Run::default();
    let mut start = 0;

    for (i, ch) in source.char_indices() {
        let mut resume = i + 1;

        let current = match ch {
            BOLD => prev.toggled(Toggle::Bold),
            MONOSPACE => prev.toggled(Toggle::Monospace),
            ITALIC => prev.toggled(Toggle::Italic),
            STRIKETHROUGH => prev.toggled(Toggle::Strikethrough),
            UNDERLINE => prev.toggled(Toggle::Underline),
            COLOR => {
                let directive = directives
                    .get(&i)
                    .copied()
                    .unwrap_or(ColorDirective::BARE);
                resume = i + directive.str_size;
                prev.recolored(directive.foreground, directive.background)
            }
            REVERSE => prev.reversed(),
            RESET => Run::default(),
            _ => continue,
        };

        let span = &source[start..i];
        if !span.is_empty() {
            runs.push(prev.with_text(span));
        }

        prev = current;
        start = resume;
    }

    StyledText::new(runs)
}
