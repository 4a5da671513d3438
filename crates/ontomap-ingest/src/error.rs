//! Error types for graph ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// A graph serialization could not be read or parsed. Fatal: surfaced to the
/// caller with the underlying cause before any extraction happens.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path} as Turtle")]
    Parse {
        path: PathBuf,
        #[source]
        source: oxttl::TurtleParseError,
    },
}
