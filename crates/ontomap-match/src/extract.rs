//! Concept extraction from the two input graphs.
//!
//! Two schema-specific strategies share one contract shape: walk the triple
//! store, build an identifier-to-concept table, and skip anything malformed
//! or missing instead of raising. A node with no labels never becomes a
//! concept.

use std::collections::BTreeMap;

use tracing::debug;

use ontomap_model::{GraphStore, Iri, OntologyConcept, TaxonomyConcept, vocab};

/// Resolve the ontology namespace to extract classes from.
///
/// An explicitly configured namespace takes precedence (handled by the
/// caller). Otherwise: scan declared prefixes for the optional hint
/// (case-insensitive, matched against prefix name and namespace IRI), then
/// fall back to the namespace occurring most frequently among `owl:Class`
/// subjects, ties broken by first encounter. Returns `None` when the graph
/// declares no usable prefix and has no typed classes at all; callers treat
/// that as an empty ontology side, not an error.
///
/// The frequency fallback is a heuristic and can pick the wrong namespace on
/// graphs with mixed conventions; callers should surface the choice (the
/// pipeline logs it) rather than apply it silently.
pub fn detect_ontology_namespace(graph: &GraphStore, hint: Option<&str>) -> Option<String> {
    if let Some(hint) = hint {
        let needle = hint.to_lowercase();
        for (prefix, namespace) in graph.prefixes() {
            if prefix.to_lowercase().contains(&needle)
                || namespace.to_lowercase().contains(&needle)
            {
                return Some(namespace.clone());
            }
        }
    }

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for subject in graph.subjects_of_type(vocab::OWL_CLASS) {
        let namespace = subject.namespace();
        match counts.iter_mut().find(|(seen, _)| *seen == namespace) {
            Some((_, count)) => *count += 1,
            None => counts.push((namespace, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (namespace, count) in counts {
        let replace = match best {
            Some((_, best_count)) => count > best_count,
            None => true,
        };
        if replace {
            best = Some((namespace, count));
        }
    }
    best.map(|(namespace, _)| namespace.to_string())
}

/// Extract `owl:Class` nodes under `namespace` from the ontology graph.
///
/// Labels are the union of `rdfs:label` and `skos:prefLabel` literal values,
/// deduplicated in encounter order; the first one becomes the primary label.
/// Parents are `rdfs:subClassOf` objects restricted to resolvable IRIs;
/// blank-node and literal superclass expressions are skipped.
pub fn extract_ontology_concepts(
    graph: &GraphStore,
    namespace: &str,
) -> BTreeMap<Iri, OntologyConcept> {
    let mut concepts = BTreeMap::new();
    for subject in graph.subjects_of_type(vocab::OWL_CLASS) {
        if !subject.as_str().starts_with(namespace) {
            continue;
        }

        let mut labels: Vec<String> = Vec::new();
        for predicate in [vocab::RDFS_LABEL, vocab::SKOS_PREF_LABEL] {
            for object in graph.objects(subject.as_str(), predicate) {
                if let Some(value) = object.as_literal()
                    && !labels.iter().any(|existing| existing == value)
                {
                    labels.push(value.to_string());
                }
            }
        }
        if labels.is_empty() {
            continue;
        }

        let parents: Vec<Iri> = graph
            .objects(subject.as_str(), vocab::RDFS_SUB_CLASS_OF)
            .iter()
            .filter_map(|term| term.as_iri().cloned())
            .collect();

        concepts.insert(
            subject.clone(),
            OntologyConcept {
                iri: subject.clone(),
                labels,
                parents,
            },
        );
    }
    debug!(concepts = concepts.len(), namespace, "extracted ontology classes");
    concepts
}

/// Extract `skos:Concept` nodes from the taxonomy graph.
///
/// Labels are `skos:prefLabel` literal values as a list: duplicates are
/// preserved and document order decides the primary label. The related,
/// broader, and narrower relations are carried through for reporting only.
pub fn extract_taxonomy_concepts(graph: &GraphStore) -> BTreeMap<Iri, TaxonomyConcept> {
    let mut concepts = BTreeMap::new();
    for subject in graph.subjects_of_type(vocab::SKOS_CONCEPT) {
        let labels: Vec<String> = graph
            .objects(subject.as_str(), vocab::SKOS_PREF_LABEL)
            .iter()
            .filter_map(|term| term.as_literal().map(String::from))
            .collect();
        if labels.is_empty() {
            continue;
        }

        concepts.insert(
            subject.clone(),
            TaxonomyConcept {
                iri: subject.clone(),
                labels,
                related: iri_objects(graph, subject, vocab::SKOS_RELATED),
                broader: iri_objects(graph, subject, vocab::SKOS_BROADER),
                narrower: iri_objects(graph, subject, vocab::SKOS_NARROWER),
            },
        );
    }
    debug!(concepts = concepts.len(), "extracted taxonomy concepts");
    concepts
}

fn iri_objects(graph: &GraphStore, subject: &Iri, predicate: &str) -> Vec<Iri> {
    graph
        .objects(subject.as_str(), predicate)
        .iter()
        .filter_map(|term| term.as_iri().cloned())
        .collect()
}
