//! Formatting interoperability for IRC ⇄ Discord relays
//!
//! ```text
//!     This crate converts chat text between IRC control codes and Discord markdown, through
//!     a format-agnostic intermediate representation, and provides the message plumbing a
//!     relay needs around that (mentions, author prefixes, chunking, ignore lists, routing).
//! ```
//!
//! Architecture
//!
//! ```text
//!     Every format converts to and from the IR (./ir/mod.rs): a flat sequence of runs, each
//!     carrying the full formatting state in effect for its text. Logic shared by formats
//!     lives in ./common/mod.rs, so format code stays focused on its own syntax.
//!
//!     This is a pure lib, that is, it powers relay-cli but is shell agnostic: no code here
//!     prints, reads env vars or touches the network.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # Parser implementation
//!     │   │   ├── serializer.rs   # Serializer implementation
//!     │   │   └── mod.rs
//!     ├── ir                      # Intermediate Representation
//!     ├── common                  # Common mapping code
//!     ├── relay                   # Mentions, prefixes, chunking, ignore lists, channels
//!     └── lib.rs
//! ```
//!
//! Testing
//! ```text
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs includes
//!     them as modules.
//! ```
//!
//! Core Algorithms
//!
//! ```text
//!     Parsing IRC is an explicit state walk: each control byte derives the next run state
//!     from the previous one by copy-with-change. Rendering markup diffs neighbouring runs
//!     into open/close events (./common/transitions.rs) emitted in a fixed order. The reverse
//!     direction is a fixed pipeline of regex passes that rewrite delimiters into control
//!     codes, after which the IRC parser builds the runs.
//!
//!     Conversions are total: they never fail and never panic on malformed input.
//! ```
//!
//! Formats
//!
//! ```text
//!     - irc: control codes, parse and serialize
//!     - markdown: Discord markdown, parse and serialize
//!     - plain: text with all formatting dropped
//! ```
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod relay;

pub mod common;
pub mod ir;

pub use error::FormatError;
pub use format::Format;
pub use ir::nodes::{Run, StyledText, Toggle};
pub use registry::FormatRegistry;

use formats::markdown::MarkdownOptions;

/// Converts IRC control-coded text to Discord markdown.
pub fn irc_to_markdown(text: &str) -> String {
    let runs = formats::irc::parser::parse_control_codes(text);
    formats::markdown::serializer::serialize_to_markdown(&runs, &MarkdownOptions::default())
}

/// Converts Discord markdown to IRC control-coded text.
///
/// Only delimiters are rewritten; mentions and attachments need
/// [`relay::discord_to_irc`].
pub fn markdown_to_irc(text: &str) -> String {
    formats::markdown::parser::markup_to_control_codes(text, &MarkdownOptions::default())
}
