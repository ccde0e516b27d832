//! Core data structures for the Intermediate Representation (IR).
//!
//! A message is a flat, left-to-right sequence of [`Run`]s. Each run carries the
//! cumulative formatting state in effect at its start, so no run depends on its
//! neighbours. State transitions are expressed as copy-with-change methods
//! (`toggled`, `reversed`, `recolored`) rather than in-place mutation.

use serde::Serialize;

/// One of the five independent on/off text attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Bold,
    Monospace,
    Italic,
    Strikethrough,
    Underline,
}

impl Toggle {
    /// All toggles, in the order serializers emit them.
    pub const ALL: [Toggle; 5] = [
        Toggle::Bold,
        Toggle::Italic,
        Toggle::Underline,
        Toggle::Strikethrough,
        Toggle::Monospace,
    ];
}

/// A maximal span of text sharing one formatting state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub monospace: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    /// Reverse video (foreground and background swapped)
    pub reverse: bool,
    /// Foreground palette index, `None` when unset
    pub foreground: Option<u8>,
    /// Background palette index, `None` when unset
    pub background: Option<u8>,
}

impl Run {
    /// An unstyled run holding `text`.
    pub fn plain(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            ..Run::default()
        }
    }

    /// Copy of this run's style carrying different text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            ..self.clone()
        }
    }

    pub fn flag(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Bold => self.bold,
            Toggle::Monospace => self.monospace,
            Toggle::Italic => self.italic,
            Toggle::Strikethrough => self.strikethrough,
            Toggle::Underline => self.underline,
        }
    }

    /// Copy of this run with one attribute set to `value`.
    pub fn with_flag(&self, toggle: Toggle, value: bool) -> Self {
        let mut next = self.clone();
        match toggle {
            Toggle::Bold => next.bold = value,
            Toggle::Monospace => next.monospace = value,
            Toggle::Italic => next.italic = value,
            Toggle::Strikethrough => next.strikethrough = value,
            Toggle::Underline => next.underline = value,
        }
        next
    }

    /// Copy of this run with one attribute flipped.
    pub fn toggled(&self, toggle: Toggle) -> Self {
        self.with_flag(toggle, !self.flag(toggle))
    }

    /// Copy of this run with new colors. Parts left out of a directive are unset.
    pub fn recolored(&self, foreground: Option<u8>, background: Option<u8>) -> Self {
        Run {
            foreground,
            background,
            ..self.clone()
        }
    }

    /// Copy of this run after a reverse-video code.
    ///
    /// Colors are swapped and `reverse` flips. An unset foreground after the
    /// swap becomes palette index 0, so a colorless reverse still carries an
    /// explicit foreground.
    pub fn reversed(&self) -> Self {
        Run {
            foreground: Some(self.background.unwrap_or(0)),
            background: self.foreground,
            reverse: !self.reverse,
            ..self.clone()
        }
    }

    /// Reverse video is rendered as italics, like many IRC clients do.
    pub fn effective_italic(&self) -> bool {
        self.italic || self.reverse
    }

    /// Equal foreground and background is the convention for hidden text.
    pub fn is_spoiler(&self) -> bool {
        self.foreground.is_some() && self.foreground == self.background
    }

    /// Whether two runs share every formatting attribute (text is ignored).
    pub fn same_style(&self, other: &Run) -> bool {
        self.bold == other.bold
            && self.monospace == other.monospace
            && self.italic == other.italic
            && self.strikethrough == other.strikethrough
            && self.underline == other.underline
            && self.reverse == other.reverse
            && self.foreground == other.foreground
            && self.background == other.background
    }

    /// Whether this run carries no formatting at all.
    pub fn is_unstyled(&self) -> bool {
        self.same_style(&Run::default())
    }
}

/// Represents the root of a message: its runs in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyledText {
    pub runs: Vec<Run>,
}

impl StyledText {
    pub fn new(runs: Vec<Run>) -> Self {
        StyledText { runs }
    }

    /// A message consisting of one unstyled run (or none for empty text).
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            StyledText::default()
        } else {
            StyledText::new(vec![Run::plain(text)])
        }
    }

    /// The text of every run concatenated, with all formatting dropped.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Drops empty runs and merges neighbours that share a style.
    ///
    /// Two encodings of the same visible message normalize to the same value,
    /// which makes this the comparison to use for round-trip checks.
    pub fn normalized(&self) -> StyledText {
        let mut runs: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.iter().filter(|run| !run.text.is_empty()) {
            match runs.last_mut() {
                Some(last) if last.same_style(run) => last.text.push_str(&run.text),
                _ => runs.push(run.clone()),
            }
        }
        StyledText { runs }
    }
}

impl From<Vec<Run>> for StyledText {
    fn from(runs: Vec<Run>) -> Self {
        StyledText::new(runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_one_attribute() {
        let run = Run::plain("x").toggled(Toggle::Bold);
        assert!(run.bold);
        assert!(!run.italic);
        assert!(!run.toggled(Toggle::Bold).bold);
    }

    #[test]
    fn reversed_without_colors_sets_default_foreground() {
        let run = Run::default().reversed();
        assert_eq!(run.foreground, Some(0));
        assert_eq!(run.background, None);
        assert!(run.reverse);
    }

    #[test]
    fn reversed_swaps_existing_colors() {
        let run = Run::default().recolored(Some(4), Some(7)).reversed();
        assert_eq!(run.foreground, Some(7));
        assert_eq!(run.background, Some(4));
    }

    #[test]
    fn spoiler_requires_a_set_foreground() {
        assert!(!Run::default().is_spoiler());
        assert!(Run::default().recolored(Some(1), Some(1)).is_spoiler());
        assert!(!Run::default().recolored(Some(1), Some(2)).is_spoiler());
    }

    #[test]
    fn normalized_merges_equal_neighbours() {
        let bold = Run::plain("").toggled(Toggle::Bold);
        let doc = StyledText::new(vec![
            Run::plain("a"),
            Run::plain("b"),
            bold.with_text(""),
            bold.with_text("c"),
            bold.with_text("d"),
        ]);
        let normalized = doc.normalized();
        assert_eq!(
            normalized.runs,
            vec![Run::plain("ab"), bold.with_text("cd")]
        );
    }
}
