//! Accepted mappings, coverage gaps, and run statistics.

use serde::{Deserialize, Serialize};

use crate::ids::Iri;

/// An accepted association between an ontology class and a taxonomy concept.
///
/// `similarity` is the raw score and always satisfies
/// `similarity >= threshold`; a single ontology concept appears in at most
/// `top_n` records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRecord {
    pub ontology_iri: Iri,
    /// The concept's primary label, regardless of which variant matched.
    pub ontology_label: String,
    /// The label variant the score was computed against.
    pub matched_label: String,
    pub taxonomy_iri: Iri,
    pub taxonomy_label: String,
    pub similarity: f64,
    /// Up to three parent IRIs joined with `"; "`, for context in reports.
    pub parent_context: String,
}

/// A concept from either side that appears in zero mapping records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapRecord {
    pub iri: Iri,
    /// Primary label.
    pub label: String,
    pub all_labels: Vec<String>,
    /// Parent context; always empty for taxonomy-side gaps.
    pub parents: Vec<Iri>,
}

/// Read-only statistics derived from the mapping and gap tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ontology_concepts: usize,
    pub taxonomy_concepts: usize,
    pub mappings: usize,
    pub mapped_ontology_concepts: usize,
    pub mapped_taxonomy_concepts: usize,
    pub unmapped_ontology_concepts: usize,
    pub unmapped_taxonomy_concepts: usize,
    /// Mean similarity across accepted mappings; `None` when there are none.
    pub mean_similarity: Option<f64>,
    /// Median similarity across accepted mappings; `None` when there are none.
    pub median_similarity: Option<f64>,
}
