//! IRC control-code serialization (runs → control codes)
//!
//! The serializer keeps a copy of the state a reader of the output would be in
//! and, before each run, emits the bytes that move that state to the run's
//! style. Each byte is applied to the simulated state with the same
//! copy-with-change method the parser uses, so whatever is written here reads
//! back as the same style.
//!
//! Text containing control bytes of its own is written as-is.

use super::color::{encode_directive, text_extends_directive};
use super::{control_for, BOLD, RESET, REVERSE};
use crate::ir::nodes::{Run, StyledText, Toggle};

/// Serialize runs into IRC control-coded text.
pub fn serialize_to_control_codes(doc: &StyledText) -> String {
    let mut out = String::new();
    let mut state = Run::default();

    for run in doc.runs.iter().filter(|run| !run.text.is_empty()) {
        transition(&mut out, &mut state, run);
        out.push_str(&run.text);
    }
    transition(&mut out, &mut state, &Run::default());

    out
}

fn transition(out: &mut String, state: &mut Run, target: &Run) {
    if state.same_style(target) {
        return;
    }

    // Colors and reverse have no "off" byte of their own.
    let sticky = state.reverse || state.foreground.is_some() || state.background.is_some();
    if target.is_unstyled() && sticky {
        out.push(RESET);
        *state = Run::default();
        return;
    }

    for toggle in Toggle::ALL {
        if state.flag(toggle) != target.flag(toggle) {
            out.push(control_for(toggle));
            *state = state.toggled(toggle);
        }
    }

    if state.reverse != target.reverse {
        out.push(REVERSE);
        *state = state.reversed();
    }

    if (state.foreground, state.background) != (target.foreground, target.background) {
        out.push_str(&encode_directive(target.foreground, target.background));
        *state = state.recolored(target.foreground, target.background);

        // An empty bold pair keeps leading digits out of the directive.
        if text_extends_directive(target.foreground, target.background, &target.text) {
            out.push(BOLD);
            out.push(BOLD);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::irc::parser::parse_control_codes;

    fn serialize(runs: Vec<Run>) -> String {
        serialize_to_control_codes(&StyledText::new(runs))
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(serialize(vec![Run::plain("hello")]), "hello");
    }

    #[test]
    fn toggles_wrap_styled_runs() {
        let bold = Run::plain("b").toggled(Toggle::Bold);
        assert_eq!(
            serialize(vec![Run::plain("a "), bold, Run::plain(" c")]),
            "a \x02b\x02 c"
        );
    }

    #[test]
    fn colors_are_cleared_with_reset() {
        let red = Run::plain("red").recolored(Some(4), None);
        assert_eq!(serialize(vec![red, Run::plain("x")]), "\x0304red\x0Fx");
    }

    #[test]
    fn color_change_between_styled_runs_uses_a_directive() {
        let red = Run::plain("a").toggled(Toggle::Bold).recolored(Some(4), None);
        let bold = red.recolored(None, None).with_text("b");
        assert_eq!(serialize(vec![red, bold]), "\x02\x0304a\x03b\x02");
    }

    #[test]
    fn digits_after_a_directive_are_separated() {
        let colored = Run::plain("5 apples").recolored(Some(3), None);
        let out = serialize(vec![colored.clone()]);
        assert_eq!(out, "\x0303\x02\x025 apples\x0F");
        assert_eq!(parse_control_codes(&out).runs, vec![colored]);
    }

    #[test]
    fn reverse_video_round_trips() {
        let reversed = Run::plain("r").recolored(Some(4), Some(2)).reversed();
        let doc = StyledText::new(vec![Run::plain("n"), reversed]);
        let out = serialize_to_control_codes(&doc);
        assert_eq!(parse_control_codes(&out), doc);
    }

    #[test]
    fn empty_runs_are_skipped() {
        let bold = Run::plain("").toggled(Toggle::Bold);
        assert_eq!(serialize(vec![bold, Run::plain("x")]), "x");
    }
}
