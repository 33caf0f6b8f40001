//! Support library for the gridspan CLI binary.
//!
//! Exposes the command pipeline and logging setup so integration tests and
//! doctests can drive them without spawning a subprocess.

pub mod cli;
pub mod logging;
