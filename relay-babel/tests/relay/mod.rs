//! Relay pipeline tests
//!
//! End-to-end message flows through the relay helpers.

mod pipeline;
