//! Format implementations
//!
//! This module contains all format implementations that convert between
//! runs and the text representations chat networks use.

pub mod irc;
pub mod markdown;
pub mod plain;

pub use irc::IrcFormat;
pub use markdown::{MarkdownFormat, MarkdownOptions};
pub use plain::PlainFormat;
