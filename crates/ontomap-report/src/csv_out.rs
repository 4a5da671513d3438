//! CSV emission for the mapping and gap tables.
//!
//! A table with zero rows produces no file at all; callers receive the paths
//! that were actually written. Similarity scores are formatted with three
//! decimal places at this boundary only; the in-memory records keep raw
//! scores.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use ontomap_model::{GapRecord, Iri, MappingRecord};

/// Paths of the report files a run produced. `None` means the corresponding
/// table was empty and intentionally not written.
#[derive(Debug, Clone, Default)]
pub struct ReportPaths {
    pub mappings: Option<PathBuf>,
    pub ontology_gaps: Option<PathBuf>,
    pub taxonomy_gaps: Option<PathBuf>,
}

/// Write the non-empty tables under `output_dir` as
/// `<prefix>_mappings.csv`, `<prefix>_gaps_ontology.csv`, and
/// `<prefix>_gaps_taxonomy.csv`.
pub fn write_reports(
    output_dir: &Path,
    prefix: &str,
    mappings: &[MappingRecord],
    ontology_gaps: &[GapRecord],
    taxonomy_gaps: &[GapRecord],
) -> Result<ReportPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let mut paths = ReportPaths::default();

    if !mappings.is_empty() {
        let path = output_dir.join(format!("{prefix}_mappings.csv"));
        write_mappings_csv(&path, mappings)?;
        info!(path = %path.display(), rows = mappings.len(), "wrote mapping table");
        paths.mappings = Some(path);
    }
    if !ontology_gaps.is_empty() {
        let path = output_dir.join(format!("{prefix}_gaps_ontology.csv"));
        write_ontology_gaps_csv(&path, ontology_gaps)?;
        info!(path = %path.display(), rows = ontology_gaps.len(), "wrote ontology gap table");
        paths.ontology_gaps = Some(path);
    }
    if !taxonomy_gaps.is_empty() {
        let path = output_dir.join(format!("{prefix}_gaps_taxonomy.csv"));
        write_taxonomy_gaps_csv(&path, taxonomy_gaps)?;
        info!(path = %path.display(), rows = taxonomy_gaps.len(), "wrote taxonomy gap table");
        paths.taxonomy_gaps = Some(path);
    }

    Ok(paths)
}

/// Write the mapping table. Columns are part of the persisted contract.
pub fn write_mappings_csv(path: &Path, records: &[MappingRecord]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record([
        "ontology_iri",
        "ontology_label",
        "matched_label",
        "taxonomy_iri",
        "taxonomy_label",
        "similarity",
        "ontology_parents",
    ])?;
    for record in records {
        let similarity = format!("{:.3}", record.similarity);
        writer.write_record([
            record.ontology_iri.as_str(),
            record.ontology_label.as_str(),
            record.matched_label.as_str(),
            record.taxonomy_iri.as_str(),
            record.taxonomy_label.as_str(),
            similarity.as_str(),
            record.parent_context.as_str(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))
}

/// Write the ontology-side gap table (carries parent context).
pub fn write_ontology_gaps_csv(path: &Path, records: &[GapRecord]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record(["iri", "label", "all_labels", "parents"])?;
    for record in records {
        let all_labels = record.all_labels.join("; ");
        let parents = join_iris(&record.parents);
        writer.write_record([
            record.iri.as_str(),
            record.label.as_str(),
            all_labels.as_str(),
            parents.as_str(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))
}

/// Write the taxonomy-side gap table (no parent column).
pub fn write_taxonomy_gaps_csv(path: &Path, records: &[GapRecord]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record(["iri", "label", "all_labels"])?;
    for record in records {
        let all_labels = record.all_labels.join("; ");
        writer.write_record([record.iri.as_str(), record.label.as_str(), all_labels.as_str()])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))
}

fn join_iris(iris: &[Iri]) -> String {
    iris.iter()
        .take(3)
        .map(Iri::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}
