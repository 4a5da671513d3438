//! Graph ingestion for the reconciliation pipeline.
//!
//! This crate is the I/O boundary in front of the core: it parses a Turtle
//! serialization into the in-memory [`ontomap_model::GraphStore`] and does
//! nothing else. All matching logic lives in `ontomap-match`.

mod error;
mod turtle;

pub use error::IngestError;
pub use turtle::load_turtle;
