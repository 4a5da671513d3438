//! Ontology/taxonomy reconciliation core.
//!
//! Given two concept tables extracted from independently authored graphs,
//! this crate scores fuzzy label similarity between every candidate pair,
//! ranks and filters candidates into a mapping set, and derives the
//! two-sided coverage-gap report. Everything here is a pure, synchronous
//! computation over in-memory data; parsing and report writing live in the
//! `ontomap-ingest` and `ontomap-report` crates.

pub mod extract;
pub mod gaps;
pub mod normalize;
pub mod rank;
pub mod score;
pub mod summary;

pub use extract::{
    detect_ontology_namespace, extract_ontology_concepts, extract_taxonomy_concepts,
};
pub use gaps::find_gaps;
pub use normalize::normalize_label;
pub use rank::rank_matches;
pub use score::label_similarity;
pub use summary::summarize;
