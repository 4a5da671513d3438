//! Report generation for reconciliation runs.
//!
//! Serializes the three tabular outputs (mappings, ontology gaps, taxonomy
//! gaps) as CSV and the run summary as JSON. Empty tables are omitted
//! entirely rather than written as header-only files.

mod csv_out;
mod summary_json;

pub use csv_out::{
    ReportPaths, write_mappings_csv, write_ontology_gaps_csv, write_reports,
    write_taxonomy_gaps_csv,
};
pub use summary_json::write_summary_json;
