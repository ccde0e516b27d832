//! IRC format tests
//!
//! Tests for control-code parsing and serialization.

mod parse;
mod serialize;
