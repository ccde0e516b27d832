//! CLI-specific transforms
//!
//! This module defines the views the `inspect` command can print. Each
//! transform is a stage + format combination (e.g., "runs-json", "events-simple").
//!
//! ## Transform Pipeline
//!
//! 1. **Parsing** - Source text → runs
//!    - `runs-json`: runs as JSON
//!    - `runs-table`: one line per run with its active attributes
//!
//! 2. **Flattening** - Runs → style events
//!    - `events-simple`: one event per line, as a markup serializer sees them
//!
//! 3. **Serialization** - Runs → text, with control bytes made visible
//!    - `irc-escaped`: control codes as `\xNN` escapes
//!
//! ## Extra Parameters
//!
//! - `normalize`: When set to "true", merges neighbouring runs that share a
//!   style before printing.
//!
//! Example: `relay inspect message.irc runs-table --extra-normalize`

use relay_babel::common::transitions::runs_to_events;
use relay_babel::format::bool_option;
use relay_babel::formats::irc::serializer::serialize_to_control_codes;
use relay_babel::ir::events::Event;
use relay_babel::ir::nodes::{Run, StyledText};
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &["runs-json", "runs-table", "events-simple", "irc-escaped"];

/// Execute a named transform on parsed runs with optional extra parameters
///
/// # Extra Parameters
///
/// - `normalize`: "true" - merge neighbouring runs with the same style first
///
/// # Examples
///
/// ```ignore
/// let doc = FormatRegistry::default().parse("\x02hi\x02", "irc")?;
/// let output = execute_transform(&doc, "runs-table", &HashMap::new())?;
/// ```
pub fn execute_transform(
    doc: &StyledText,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let normalize = bool_option(extra_params, "normalize")
        .map_err(|e| e.to_string())?
        .unwrap_or(false);
    let normalized;
    let doc = if normalize {
        normalized = doc.normalized();
        &normalized
    } else {
        doc
    };

    match transform_name {
        "runs-json" => serde_json::to_string_pretty(doc)
            .map(|json| json + "\n")
            .map_err(|e| format!("JSON serialization failed: {e}")),
        "runs-table" => Ok(runs_to_table(&doc.runs)),
        "events-simple" => Ok(events_to_simple(&runs_to_events(&doc.runs))),
        "irc-escaped" => Ok(escape_controls(&serialize_to_control_codes(doc)) + "\n"),
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn run_attributes(run: &Run) -> String {
    let mut attrs: Vec<String> = [
        (run.bold, "bold"),
        (run.italic, "italic"),
        (run.underline, "underline"),
        (run.strikethrough, "strike"),
        (run.monospace, "mono"),
        (run.reverse, "reverse"),
    ]
    .iter()
    .filter(|(on, _)| *on)
    .map(|(_, name)| name.to_string())
    .collect();

    if let Some(fg) = run.foreground {
        attrs.push(format!("fg={fg}"));
    }
    if let Some(bg) = run.background {
        attrs.push(format!("bg={bg}"));
    }
    if run.is_spoiler() {
        attrs.push("spoiler".to_string());
    }

    if attrs.is_empty() {
        "plain".to_string()
    } else {
        attrs.join(" ")
    }
}

fn runs_to_table(runs: &[Run]) -> String {
    let mut out = String::new();
    for (i, run) in runs.iter().enumerate() {
        out.push_str(&format!("{i:>3}  {:<32} {:?}\n", run_attributes(run), run.text));
    }
    out
}

fn events_to_simple(events: &[Event]) -> String {
    let mut out = String::new();
    for event in events {
        let line = match event {
            Event::Open(style) => format!("open  {style:?}"),
            Event::Close(style) => format!("close {style:?}"),
            Event::Text(text) => format!("text  {text:?}"),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Replaces ASCII control characters with `\xNN` escapes.
pub fn escape_controls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_control() && ch != '\n' {
            out.push_str(&format!("\\x{:02X}", ch as u32));
        } else {
            out.push(ch);
        }
    }
    out
}
