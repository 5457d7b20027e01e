//! Initialization logic for logging that is shared between binaries, plus a
//! panic hook that reports through the same channel.

pub mod tracing;
