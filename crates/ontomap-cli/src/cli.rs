//! CLI argument definitions for the ontology mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use ontomap_model::{DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TOP_N};

#[derive(Parser)]
#[command(
    name = "ontomap",
    version,
    about = "Ontology/taxonomy reconciliation - fuzzy label mapping and gap analysis",
    long_about = "Compare concept labels between a domain ontology (owl:Class with\n\
                  rdfs:label/skos:prefLabel) and a reference taxonomy (skos:Concept\n\
                  with skos:prefLabel), rank fuzzy matches above a similarity\n\
                  threshold, and report the unmapped concepts on both sides."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map ontology classes onto taxonomy concepts and report coverage gaps.
    Map(MapArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the ontology Turtle file (the side being mapped outward).
    #[arg(value_name = "ONTOLOGY")]
    pub ontology: PathBuf,

    /// Path to the taxonomy Turtle file (the side supplying candidates).
    #[arg(value_name = "TAXONOMY")]
    pub taxonomy: PathBuf,

    /// Directory for generated CSV files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Filename prefix for generated reports.
    #[arg(
        long = "prefix",
        value_name = "PREFIX",
        default_value = "ontology_mapping"
    )]
    pub prefix: String,

    /// Minimum similarity for a candidate match (0.0-1.0; higher = stricter).
    #[arg(long = "threshold", default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
    pub threshold: f64,

    /// Candidate matches reported per ontology concept.
    #[arg(long = "top-n", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Ontology namespace to extract classes from (skips auto-detection).
    #[arg(long = "source-namespace", value_name = "IRI")]
    pub source_namespace: Option<String>,

    /// Substring matched against declared prefixes during namespace
    /// auto-detection.
    #[arg(long = "namespace-hint", value_name = "HINT")]
    pub namespace_hint: Option<String>,

    /// Compute and summarize without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write the run summary as JSON to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn map_defaults_match_documented_values() {
        let cli = Cli::parse_from(["ontomap", "map", "onto.ttl", "tax.ttl"]);
        let Command::Map(args) = cli.command;
        assert_eq!(args.threshold, DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(args.top_n, DEFAULT_TOP_N);
        assert_eq!(args.prefix, "ontology_mapping");
        assert!(!args.dry_run);
    }
}
