//! Intermediate Representation (IR) for chat messages.
//!
//! This module defines a format-agnostic representation of a formatted chat
//! message, designed to facilitate conversion between IRC control codes,
//! Discord markdown and plain text.

pub mod events;
pub mod nodes;
