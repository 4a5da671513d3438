//! Subcommand entry points.

use anyhow::Result;

use ontomap_cli::pipeline::{MapOutcome, MapRequest, run_map};
use ontomap_model::MatchOptions;

use crate::cli::MapArgs;

pub fn run_map_command(args: &MapArgs) -> Result<MapOutcome> {
    let mut options = MatchOptions::new()
        .with_threshold(args.threshold)
        .with_top_n(args.top_n);
    if let Some(namespace) = &args.source_namespace {
        options = options.with_namespace(namespace.as_str());
    }
    if let Some(hint) = &args.namespace_hint {
        options = options.with_namespace_hint(hint.as_str());
    }

    let request = MapRequest {
        ontology_path: args.ontology.clone(),
        taxonomy_path: args.taxonomy.clone(),
        output_dir: args.output_dir.clone(),
        prefix: args.prefix.clone(),
        options,
        dry_run: args.dry_run,
        summary_json: args.summary_json.clone(),
    };
    run_map(&request)
}
