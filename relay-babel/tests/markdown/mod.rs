//! Markdown format tests
//!
//! Tests for bidirectional Markdown ↔ IRC conversion.

mod export;
mod import;
