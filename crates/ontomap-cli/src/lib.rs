//! Library surface of the `ontomap` CLI.
//!
//! The logging setup and the staged pipeline live here so the binary and
//! the integration tests can share them; argument parsing and console
//! rendering stay private to `main.rs`.

pub mod logging;
pub mod pipeline;
