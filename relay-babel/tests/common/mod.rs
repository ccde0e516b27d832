//! Helpers shared by the integration tests.

use relay_babel::ir::nodes::StyledText;

/// One line per run: its active attributes followed by the quoted text.
pub fn describe(doc: &StyledText) -> String {
    doc.runs
        .iter()
        .map(|run| {
            let mut attrs = Vec::new();
            for (on, name) in [
                (run.bold, "bold"),
                (run.italic, "italic"),
                (run.underline, "underline"),
                (run.strikethrough, "strike"),
                (run.monospace, "mono"),
                (run.reverse, "reverse"),
            ] {
                if on {
                    attrs.push(name.to_string());
                }
            }
            if let Some(fg) = run.foreground {
                attrs.push(format!("fg={fg}"));
            }
            if let Some(bg) = run.background {
                attrs.push(format!("bg={bg}"));
            }
            if attrs.is_empty() {
                attrs.push("plain".to_string());
            }
            format!("{} {:?}", attrs.join(" "), run.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
