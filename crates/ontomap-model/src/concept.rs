//! Labeled concepts extracted from the two input graphs.
//!
//! Concepts are created once during extraction and never mutated. A concept
//! with no labels is never materialized, so `primary_label` is total in
//! practice. Label order follows the input serialization order, which keeps
//! the primary label stable across repeated runs.

use serde::{Deserialize, Serialize};

use crate::ids::Iri;

/// A class extracted from the ontology (source) side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyConcept {
    pub iri: Iri,
    /// Union of `rdfs:label` and `skos:prefLabel` values, deduplicated in
    /// first-encountered order.
    pub labels: Vec<String>,
    /// Immediate superclass IRIs. Blank-node and literal superclass
    /// expressions are not representable here and are skipped at extraction.
    pub parents: Vec<Iri>,
}

impl OntologyConcept {
    /// The label used for display and reporting: the first one encountered.
    pub fn primary_label(&self) -> &str {
        self.labels.first().map_or("", String::as_str)
    }
}

/// A controlled-vocabulary concept extracted from the taxonomy (reference)
/// side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyConcept {
    pub iri: Iri,
    /// `skos:prefLabel` values in document order. Duplicates are preserved;
    /// the first entry is the primary label.
    pub labels: Vec<String>,
    /// Contextual relations, carried through for reporting only and never
    /// consulted during scoring.
    pub related: Vec<Iri>,
    pub broader: Vec<Iri>,
    pub narrower: Vec<Iri>,
}

impl TaxonomyConcept {
    pub fn primary_label(&self) -> &str {
        self.labels.first().map_or("", String::as_str)
    }
}
