//! Coverage-gap derivation.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use ontomap_model::{GapRecord, Iri, MappingRecord, OntologyConcept, TaxonomyConcept};

/// Derive the two-sided complement of the accepted mapping set.
///
/// A concept is a gap when its identifier appears in no mapping record on
/// its side. The returned vectors together with the mapped concepts form
/// exact, disjoint partitions of each side's concept table. An empty mapping
/// set makes every concept on both sides a gap.
pub fn find_gaps(
    ontology: &BTreeMap<Iri, OntologyConcept>,
    taxonomy: &BTreeMap<Iri, TaxonomyConcept>,
    mappings: &[MappingRecord],
) -> (Vec<GapRecord>, Vec<GapRecord>) {
    let mapped_ontology: BTreeSet<&str> =
        mappings.iter().map(|m| m.ontology_iri.as_str()).collect();
    let mapped_taxonomy: BTreeSet<&str> =
        mappings.iter().map(|m| m.taxonomy_iri.as_str()).collect();

    let ontology_gaps: Vec<GapRecord> = ontology
        .values()
        .filter(|concept| !mapped_ontology.contains(concept.iri.as_str()))
        .map(|concept| GapRecord {
            iri: concept.iri.clone(),
            label: concept.primary_label().to_string(),
            all_labels: concept.labels.clone(),
            parents: concept.parents.clone(),
        })
        .collect();

    let taxonomy_gaps: Vec<GapRecord> = taxonomy
        .values()
        .filter(|concept| !mapped_taxonomy.contains(concept.iri.as_str()))
        .map(|concept| GapRecord {
            iri: concept.iri.clone(),
            label: concept.primary_label().to_string(),
            all_labels: concept.labels.clone(),
            parents: Vec::new(),
        })
        .collect();

    debug!(
        ontology_gaps = ontology_gaps.len(),
        taxonomy_gaps = taxonomy_gaps.len(),
        "derived coverage gaps"
    );
    (ontology_gaps, taxonomy_gaps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ontology_table(iris: &[&str]) -> BTreeMap<Iri, OntologyConcept> {
        iris.iter()
            .map(|iri| {
                (
                    Iri::from(*iri),
                    OntologyConcept {
                        iri: Iri::from(*iri),
                        labels: vec![format!("label for {iri}")],
                        parents: vec![],
                    },
                )
            })
            .collect()
    }

    fn taxonomy_table(iris: &[&str]) -> BTreeMap<Iri, TaxonomyConcept> {
        iris.iter()
            .map(|iri| {
                (
                    Iri::from(*iri),
                    TaxonomyConcept {
                        iri: Iri::from(*iri),
                        labels: vec![format!("label for {iri}")],
                        related: vec![],
                        broader: vec![],
                        narrower: vec![],
                    },
                )
            })
            .collect()
    }

    fn mapping(ontology_iri: &str, taxonomy_iri: &str) -> MappingRecord {
        MappingRecord {
            ontology_iri: Iri::from(ontology_iri),
            ontology_label: String::new(),
            matched_label: String::new(),
            taxonomy_iri: Iri::from(taxonomy_iri),
            taxonomy_label: String::new(),
            similarity: 1.0,
            parent_context: String::new(),
        }
    }

    #[test]
    fn empty_mapping_set_gaps_everything() {
        let ontology = ontology_table(&["http://o/a", "http://o/b"]);
        let taxonomy = taxonomy_table(&["http://t/x"]);

        let (ontology_gaps, taxonomy_gaps) = find_gaps(&ontology, &taxonomy, &[]);
        assert_eq!(ontology_gaps.len(), 2);
        assert_eq!(taxonomy_gaps.len(), 1);
    }

    #[test]
    fn mapped_concepts_are_excluded_on_both_sides() {
        let ontology = ontology_table(&["http://o/a", "http://o/b"]);
        let taxonomy = taxonomy_table(&["http://t/x", "http://t/y"]);
        let mappings = vec![mapping("http://o/a", "http://t/y")];

        let (ontology_gaps, taxonomy_gaps) = find_gaps(&ontology, &taxonomy, &mappings);
        assert_eq!(ontology_gaps.len(), 1);
        assert_eq!(ontology_gaps[0].iri.as_str(), "http://o/b");
        assert_eq!(taxonomy_gaps.len(), 1);
        assert_eq!(taxonomy_gaps[0].iri.as_str(), "http://t/x");
    }

    #[test]
    fn taxonomy_gaps_carry_no_parents() {
        let taxonomy = taxonomy_table(&["http://t/x"]);
        let (_, taxonomy_gaps) = find_gaps(&BTreeMap::new(), &taxonomy, &[]);
        assert!(taxonomy_gaps[0].parents.is_empty());
    }
}
