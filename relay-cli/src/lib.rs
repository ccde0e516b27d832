//! Library side of the `relay` command-line tool.
//!
//! Holds the inspect transforms so they can be tested without spawning the binary.

pub mod transforms;
