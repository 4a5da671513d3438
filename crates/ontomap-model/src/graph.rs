//! In-memory triple store backing concept extraction.
//!
//! The store exposes exactly the capability surface the reconciliation core
//! needs: subjects for a type constant, objects for a (subject, predicate)
//! pair, and the graph's declared prefix bindings. Iteration orders are
//! stable across runs given identical input serialization order: typed
//! subjects come back in first-seen order and objects in insertion order.

use std::collections::BTreeMap;

use crate::ids::Iri;
use crate::vocab;

/// The object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    Iri(Iri),
    Blank(String),
    Literal(String),
}

impl Term {
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Self::Iri(iri) => Some(iri),
            Self::Blank(_) | Self::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Iri(_) | Self::Blank(_) => None,
        }
    }
}

/// An indexed, immutable-after-load triple store.
///
/// Blank-node subjects are dropped on insert: they carry no stable
/// identifier that could appear in a mapping or gap table.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    statements: BTreeMap<Iri, BTreeMap<Iri, Vec<Term>>>,
    typed_subjects: BTreeMap<Iri, Vec<Iri>>,
    prefixes: Vec<(String, String)>,
    triple_count: usize,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one triple. Type statements (`rdf:type` with an IRI object)
    /// additionally feed the typed-subject index.
    pub fn insert(&mut self, subject: Iri, predicate: Iri, object: Term) {
        if predicate.as_str() == vocab::RDF_TYPE
            && let Term::Iri(class) = &object
        {
            let subjects = self.typed_subjects.entry(class.clone()).or_default();
            if !subjects.contains(&subject) {
                subjects.push(subject.clone());
            }
        }
        self.statements
            .entry(subject)
            .or_default()
            .entry(predicate)
            .or_default()
            .push(object);
        self.triple_count += 1;
    }

    /// Record a prefix binding declared by the source document.
    pub fn declare_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.push((prefix.into(), namespace.into()));
    }

    /// Subjects carrying `rdf:type <class>`, in first-seen order.
    pub fn subjects_of_type(&self, class: &str) -> &[Iri] {
        self.typed_subjects
            .get(class)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Objects of (subject, predicate), in insertion order.
    pub fn objects(&self, subject: &str, predicate: &str) -> &[Term] {
        self.statements
            .get(subject)
            .and_then(|by_predicate| by_predicate.get(predicate))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Declared prefix→namespace bindings, in declaration order.
    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    pub fn len(&self) -> usize {
        self.triple_count
    }

    pub fn is_empty(&self) -> bool {
        self.triple_count == 0
    }
}
