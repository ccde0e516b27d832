//! Run sequence → flat style events
//!
//! Delimiter-based formats do not care about the cumulative state of each run,
//! only about where a style starts and stops. This module diffs every run
//! against its predecessor and reports the styles that switched on, the ones
//! that switched off, and the text in between.
//!
//! The positions before the first run and after the last one behave like an
//! empty unstyled run, so every style opened by the sequence is closed by the
//! final transition and the event stream is always balanced.

use crate::ir::events::{Event, Style};
use crate::ir::nodes::Run;

/// Flatten runs into `Open`/`Close`/`Text` events.
///
/// For each boundary, openings are emitted in [`Style::OPEN_ORDER`] and closings
/// in [`Style::CLOSE_ORDER`]; a style toggled on and off repeatedly yields one
/// open/close pair per toggle.
pub fn runs_to_events(runs: &[Run]) -> Vec<Event> {
    let unstyled = Run::default();
    let mut events = Vec::with_capacity(runs.len() * 2);

    for i in 0..=runs.len() {
        let current = runs.get(i).unwrap_or(&unstyled);
        let previous = if i == 0 { &unstyled } else { &runs[i - 1] };

        for style in Style::OPEN_ORDER {
            if !style.is_active(previous) && style.is_active(current) {
                events.push(Event::Open(style));
            }
        }

        for style in Style::CLOSE_ORDER {
            if style.is_active(previous) && !style.is_active(current) {
                events.push(Event::Close(style));
            }
        }

        if !current.text.is_empty() {
            events.push(Event::Text(current.text.clone()));
        }
    }

    events
}
