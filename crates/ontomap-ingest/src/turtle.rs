//! Turtle file loading.
//!
//! Parses a Turtle document into a [`GraphStore`], preserving triple order
//! so downstream label and namespace choices stay stable across runs.
//! Blank-node subjects are dropped (the store cannot address them) and
//! generalized RDF terms are skipped rather than rejected.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use oxrdf::{Subject, Term as RdfTerm};
use oxttl::TurtleParser;
use tracing::debug;

use ontomap_model::{GraphStore, Iri, Term};

use crate::error::IngestError;

/// Load a Turtle document into an indexed triple store.
pub fn load_turtle(path: &Path) -> Result<GraphStore, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut parser = TurtleParser::new().for_reader(BufReader::new(file));
    let mut graph = GraphStore::new();

    while let Some(result) = parser.next() {
        let triple = result.map_err(|source| IngestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let subject = match triple.subject {
            Subject::NamedNode(node) => Iri::new(node.into_string()),
            _ => continue,
        };
        let predicate = Iri::new(triple.predicate.into_string());
        let object = match triple.object {
            RdfTerm::NamedNode(node) => Term::Iri(Iri::new(node.into_string())),
            RdfTerm::BlankNode(node) => Term::Blank(node.into_string()),
            RdfTerm::Literal(literal) => Term::Literal(literal.destruct().0),
            _ => continue,
        };
        graph.insert(subject, predicate, object);
    }

    // Prefix declarations are only complete once the document is consumed.
    for (prefix, namespace) in parser.prefixes() {
        graph.declare_prefix(prefix, namespace);
    }

    debug!(
        path = %path.display(),
        triples = graph.len(),
        prefixes = graph.prefixes().len(),
        "loaded turtle document"
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use ontomap_model::vocab;

    fn write_ttl(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    #[test]
    fn loads_triples_and_prefixes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_ttl(
            &dir,
            "onto.ttl",
            r#"@prefix ex: <http://example.org/onto/> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

ex:WireFraud a owl:Class ;
    rdfs:label "Wire Fraud" ;
    rdfs:subClassOf ex:Fraud .
"#,
        );

        let graph = load_turtle(&path).expect("load turtle");
        let classes = graph.subjects_of_type(vocab::OWL_CLASS);
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].as_str(), "http://example.org/onto/WireFraud");

        let labels: Vec<&str> = graph
            .objects("http://example.org/onto/WireFraud", vocab::RDFS_LABEL)
            .iter()
            .filter_map(Term::as_literal)
            .collect();
        assert_eq!(labels, vec!["Wire Fraud"]);

        assert!(
            graph
                .prefixes()
                .iter()
                .any(|(prefix, ns)| prefix == "ex" && ns == "http://example.org/onto/")
        );
    }

    #[test]
    fn blank_node_subjects_are_dropped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_ttl(
            &dir,
            "blank.ttl",
            r#"@prefix ex: <http://example.org/onto/> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

ex:WireFraud a owl:Class ;
    rdfs:subClassOf [ a owl:Restriction ] .
"#,
        );

        let graph = load_turtle(&path).expect("load turtle");
        // The anonymous restriction is typed, but blank subjects are not kept.
        assert!(
            graph
                .subjects_of_type("http://www.w3.org/2002/07/owl#Restriction")
                .is_empty()
        );
        // The blank object on subClassOf survives as an opaque term.
        let parents = graph.objects("http://example.org/onto/WireFraud", vocab::RDFS_SUB_CLASS_OF);
        assert_eq!(parents.len(), 1);
        assert!(parents[0].as_iri().is_none());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let error = load_turtle(&dir.path().join("absent.ttl")).expect_err("must fail");
        assert!(matches!(error, IngestError::Read { .. }));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_ttl(&dir, "broken.ttl", "this is not turtle @@@");
        let error = load_turtle(&path).expect_err("must fail");
        assert!(matches!(error, IngestError::Parse { .. }));
    }
}
