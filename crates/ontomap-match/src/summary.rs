//! Run statistics derived from the mapping and gap tables.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use ontomap_model::{GapRecord, Iri, MappingRecord, OntologyConcept, RunSummary, TaxonomyConcept};

/// Derive read-only statistics over a completed run. Pure; carries no state
/// beyond the tables it is handed.
pub fn summarize(
    ontology: &BTreeMap<Iri, OntologyConcept>,
    taxonomy: &BTreeMap<Iri, TaxonomyConcept>,
    mappings: &[MappingRecord],
    ontology_gaps: &[GapRecord],
    taxonomy_gaps: &[GapRecord],
) -> RunSummary {
    let mapped_ontology: BTreeSet<&str> =
        mappings.iter().map(|m| m.ontology_iri.as_str()).collect();
    let mapped_taxonomy: BTreeSet<&str> =
        mappings.iter().map(|m| m.taxonomy_iri.as_str()).collect();

    let mut scores: Vec<f64> = mappings.iter().map(|m| m.similarity).collect();
    scores.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    RunSummary {
        ontology_concepts: ontology.len(),
        taxonomy_concepts: taxonomy.len(),
        mappings: mappings.len(),
        mapped_ontology_concepts: mapped_ontology.len(),
        mapped_taxonomy_concepts: mapped_taxonomy.len(),
        unmapped_ontology_concepts: ontology_gaps.len(),
        unmapped_taxonomy_concepts: taxonomy_gaps.len(),
        mean_similarity: mean(&scores),
        median_similarity: median(&scores),
    }
}

fn mean(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// Median of an already-sorted slice.
fn median(sorted: &[f64]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    })
}
