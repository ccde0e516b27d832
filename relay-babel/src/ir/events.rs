//! Defines the flat event stream representation of a message.

use crate::ir::nodes::Run;

/// A markup-level style. Differs from the run attributes in two ways:
/// reverse video folds into [`Style::Italic`], and equal fore/background
/// colors surface as [`Style::Spoiler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Italic,
    Bold,
    Underline,
    Strikethrough,
    Monospace,
    Spoiler,
}

impl Style {
    /// Order in which opening delimiters are emitted.
    pub const OPEN_ORDER: [Style; 6] = [
        Style::Italic,
        Style::Bold,
        Style::Underline,
        Style::Strikethrough,
        Style::Monospace,
        Style::Spoiler,
    ];

    /// Order in which closing delimiters are emitted. The five nestable styles
    /// close in reverse of their opening order; spoiler always closes last.
    pub const CLOSE_ORDER: [Style; 6] = [
        Style::Monospace,
        Style::Strikethrough,
        Style::Underline,
        Style::Bold,
        Style::Italic,
        Style::Spoiler,
    ];

    /// Whether this style is in effect for `run`.
    pub fn is_active(self, run: &Run) -> bool {
        match self {
            Style::Italic => run.effective_italic(),
            Style::Bold => run.bold,
            Style::Underline => run.underline,
            Style::Strikethrough => run.strikethrough,
            Style::Monospace => run.monospace,
            Style::Spoiler => run.is_spoiler(),
        }
    }
}

/// Represents a single event in the message stream.
///
/// A run sequence is flattened into style openings, closings and text, which
/// is all a delimiter-based serializer needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open(Style),
    Close(Style),
    Text(String),
}
