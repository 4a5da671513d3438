//! Reconciliation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: parse both Turtle graphs into triple stores
//! 2. **Extract**: resolve the ontology namespace, build both concept tables
//! 3. **Rank**: score label pairs, filter by threshold, keep top-N
//! 4. **Gaps**: derive unmapped concepts on both sides
//! 5. **Report**: write CSV tables and the optional JSON summary
//!
//! Stages 2-4 are pure computations over in-memory data; all I/O sits at
//! the edges, so a failed run never leaves partial mapping output behind.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use ontomap_ingest::load_turtle;
use ontomap_match::{
    detect_ontology_namespace, extract_ontology_concepts, extract_taxonomy_concepts, find_gaps,
    rank_matches, summarize,
};
use ontomap_model::{MatchOptions, RunSummary};
use ontomap_report::{ReportPaths, write_reports, write_summary_json};

/// Everything a reconciliation run needs.
#[derive(Debug, Clone)]
pub struct MapRequest {
    pub ontology_path: PathBuf,
    pub taxonomy_path: PathBuf,
    pub output_dir: PathBuf,
    pub prefix: String,
    pub options: MatchOptions,
    pub dry_run: bool,
    pub summary_json: Option<PathBuf>,
}

/// Result of a reconciliation run.
#[derive(Debug, Clone)]
pub struct MapOutcome {
    pub summary: RunSummary,
    /// The namespace classes were extracted under, if one was resolved.
    pub namespace: Option<String>,
    pub paths: ReportPaths,
}

/// Execute the full pipeline for one request.
pub fn run_map(request: &MapRequest) -> Result<MapOutcome> {
    request.options.validate().context("invalid match options")?;

    let span = info_span!("map");
    let _guard = span.enter();
    let started = Instant::now();

    info!(path = %request.ontology_path.display(), "loading ontology graph");
    let ontology_graph = load_turtle(&request.ontology_path).context("load ontology graph")?;
    info!(path = %request.taxonomy_path.display(), "loading taxonomy graph");
    let taxonomy_graph = load_turtle(&request.taxonomy_path).context("load taxonomy graph")?;

    let namespace = match &request.options.namespace {
        Some(namespace) => Some(namespace.clone()),
        None => {
            detect_ontology_namespace(&ontology_graph, request.options.namespace_hint.as_deref())
        }
    };
    let ontology = match &namespace {
        Some(namespace) => {
            // Surfaced deliberately: the frequency fallback can pick the
            // wrong namespace on graphs with mixed conventions.
            info!(namespace = %namespace, "ontology namespace");
            extract_ontology_concepts(&ontology_graph, namespace)
        }
        None => {
            warn!("no ontology namespace detected; treating the ontology side as empty");
            BTreeMap::new()
        }
    };
    let taxonomy = extract_taxonomy_concepts(&taxonomy_graph);
    info!(
        ontology = ontology.len(),
        taxonomy = taxonomy.len(),
        "extracted concept tables"
    );

    info!(
        threshold = request.options.threshold,
        top_n = request.options.top_n,
        "ranking candidate matches"
    );
    let mappings = rank_matches(&ontology, &taxonomy, &request.options);
    let (ontology_gaps, taxonomy_gaps) = find_gaps(&ontology, &taxonomy, &mappings);
    let summary = summarize(&ontology, &taxonomy, &mappings, &ontology_gaps, &taxonomy_gaps);

    let paths = if request.dry_run {
        info!("dry run; skipping report files");
        ReportPaths::default()
    } else {
        let paths = write_reports(
            &request.output_dir,
            &request.prefix,
            &mappings,
            &ontology_gaps,
            &taxonomy_gaps,
        )
        .context("write report tables")?;
        if let Some(path) = &request.summary_json {
            write_summary_json(path, &summary).context("write summary json")?;
        }
        paths
    };

    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        mappings = summary.mappings,
        "reconciliation finished"
    );

    Ok(MapOutcome {
        summary,
        namespace,
        paths,
    })
}
