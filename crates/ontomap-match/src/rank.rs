//! Candidate generation and ranking.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use ontomap_model::{Iri, MappingRecord, MatchOptions, OntologyConcept, TaxonomyConcept};

use crate::score::label_similarity;

/// Parent IRIs carried into a record's display context.
const PARENT_CONTEXT_LIMIT: usize = 3;

struct Candidate<'a> {
    matched_label: &'a str,
    taxonomy_iri: &'a Iri,
    taxonomy_label: &'a str,
    similarity: f64,
}

/// Rank taxonomy candidates for every ontology concept.
///
/// Every label variant of every ontology concept is scored against every
/// label variant of every taxonomy concept; candidates at or above
/// `options.threshold` are sorted by descending score and cut to
/// `options.top_n`. Ties are broken by taxonomy IRI, then matched ontology
/// label, then taxonomy label, all ascending, so the output order is a pure
/// function of the inputs. Each retained candidate becomes one record
/// carrying the concept's primary label for display and the matched variant
/// separately.
///
/// The scan is naive: O(|ontology| · |labels| · |taxonomy| · |labels|).
/// That is fine for hundreds to low thousands of concepts per side; larger
/// inputs need a blocking pre-filter (token or n-gram candidate generation)
/// in front of full scoring, which would not change this contract.
pub fn rank_matches(
    ontology: &BTreeMap<Iri, OntologyConcept>,
    taxonomy: &BTreeMap<Iri, TaxonomyConcept>,
    options: &MatchOptions,
) -> Vec<MappingRecord> {
    let mut records = Vec::new();

    for concept in ontology.values() {
        let mut candidates: Vec<Candidate<'_>> = Vec::new();
        for label in &concept.labels {
            for taxonomy_concept in taxonomy.values() {
                for taxonomy_label in &taxonomy_concept.labels {
                    let similarity = label_similarity(label, taxonomy_label);
                    if similarity >= options.threshold {
                        candidates.push(Candidate {
                            matched_label: label,
                            taxonomy_iri: &taxonomy_concept.iri,
                            taxonomy_label,
                            similarity,
                        });
                    }
                }
            }
        }

        candidates.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.taxonomy_iri.cmp(b.taxonomy_iri))
                .then_with(|| a.matched_label.cmp(b.matched_label))
                .then_with(|| a.taxonomy_label.cmp(b.taxonomy_label))
        });
        candidates.truncate(options.top_n);

        let parent_context = parent_context(&concept.parents);
        for candidate in candidates {
            records.push(MappingRecord {
                ontology_iri: concept.iri.clone(),
                ontology_label: concept.primary_label().to_string(),
                matched_label: candidate.matched_label.to_string(),
                taxonomy_iri: candidate.taxonomy_iri.clone(),
                taxonomy_label: candidate.taxonomy_label.to_string(),
                similarity: candidate.similarity,
                parent_context: parent_context.clone(),
            });
        }
    }

    debug!(mappings = records.len(), "ranked candidate matches");
    records
}

fn parent_context(parents: &[Iri]) -> String {
    parents
        .iter()
        .take(PARENT_CONTEXT_LIMIT)
        .map(Iri::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ontology_concept(iri: &str, labels: &[&str], parents: &[&str]) -> (Iri, OntologyConcept) {
        (
            Iri::from(iri),
            OntologyConcept {
                iri: Iri::from(iri),
                labels: labels.iter().map(|l| l.to_string()).collect(),
                parents: parents.iter().copied().map(Iri::from).collect(),
            },
        )
    }

    fn taxonomy_concept(iri: &str, labels: &[&str]) -> (Iri, TaxonomyConcept) {
        (
            Iri::from(iri),
            TaxonomyConcept {
                iri: Iri::from(iri),
                labels: labels.iter().map(|l| l.to_string()).collect(),
                related: vec![],
                broader: vec![],
                narrower: vec![],
            },
        )
    }

    #[test]
    fn exact_match_produces_one_record() {
        let ontology = BTreeMap::from([ontology_concept(
            "http://o/IdentityTheft",
            &["Identity Theft"],
            &[],
        )]);
        let taxonomy = BTreeMap::from([taxonomy_concept(
            "http://t/identity-theft",
            &["Identity Theft"],
        )]);

        let records = rank_matches(&ontology, &taxonomy, &MatchOptions::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].similarity, 1.0);
        assert_eq!(records[0].ontology_label, "Identity Theft");
        assert_eq!(records[0].matched_label, "Identity Theft");
    }

    #[test]
    fn records_carry_primary_label_not_matched_variant() {
        let ontology = BTreeMap::from([ontology_concept(
            "http://o/WireFraud",
            &["Fraude électronique", "Wire Fraud"],
            &[],
        )]);
        let taxonomy = BTreeMap::from([taxonomy_concept(
            "http://t/wire-fraud",
            &["Wire Fraud"],
        )]);

        let records = rank_matches(&ontology, &taxonomy, &MatchOptions::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ontology_label, "Fraude électronique");
        assert_eq!(records[0].matched_label, "Wire Fraud");
    }

    #[test]
    fn below_threshold_candidates_are_dropped() {
        let ontology = BTreeMap::from([ontology_concept(
            "http://o/QuantumComputing",
            &["Quantum Computing"],
            &[],
        )]);
        let taxonomy = BTreeMap::from([taxonomy_concept("http://t/wire-fraud", &["Wire Fraud"])]);

        let records = rank_matches(&ontology, &taxonomy, &MatchOptions::default());
        assert!(records.is_empty());
    }

    #[test]
    fn top_n_bounds_records_per_concept() {
        let ontology = BTreeMap::from([ontology_concept("http://o/Fraud", &["Fraud"], &[])]);
        let taxonomy = BTreeMap::from([
            taxonomy_concept("http://t/a", &["Fraud"]),
            taxonomy_concept("http://t/b", &["Fraud"]),
            taxonomy_concept("http://t/c", &["Fraud"]),
        ]);

        let options = MatchOptions::default().with_top_n(2);
        let records = rank_matches(&ontology, &taxonomy, &options);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn equal_scores_tie_break_on_taxonomy_iri() {
        let ontology = BTreeMap::from([ontology_concept("http://o/Fraud", &["Fraud"], &[])]);
        let taxonomy = BTreeMap::from([
            taxonomy_concept("http://t/b", &["Fraud"]),
            taxonomy_concept("http://t/a", &["Fraud"]),
        ]);

        let records = rank_matches(&ontology, &taxonomy, &MatchOptions::default());
        assert_eq!(records[0].taxonomy_iri.as_str(), "http://t/a");
        assert_eq!(records[1].taxonomy_iri.as_str(), "http://t/b");
    }

    #[test]
    fn parent_context_is_truncated_to_three() {
        let ontology = BTreeMap::from([ontology_concept(
            "http://o/Fraud",
            &["Fraud"],
            &["http://o/p1", "http://o/p2", "http://o/p3", "http://o/p4"],
        )]);
        let taxonomy = BTreeMap::from([taxonomy_concept("http://t/fraud", &["Fraud"])]);

        let records = rank_matches(&ontology, &taxonomy, &MatchOptions::default());
        assert_eq!(
            records[0].parent_context,
            "http://o/p1; http://o/p2; http://o/p3"
        );
    }
}
