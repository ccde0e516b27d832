//! Contains logic shared between the format implementations.

pub mod transitions;
