pub mod concept;
pub mod error;
pub mod graph;
pub mod ids;
pub mod mapping;
pub mod options;
pub mod vocab;

pub use concept::{OntologyConcept, TaxonomyConcept};
pub use error::ModelError;
pub use graph::{GraphStore, Term};
pub use ids::Iri;
pub use mapping::{GapRecord, MappingRecord, RunSummary};
pub use options::{DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_N, MatchOptions};
