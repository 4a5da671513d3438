//! Console summary rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ontomap_cli::pipeline::MapOutcome;

pub fn print_summary(outcome: &MapOutcome) {
    if let Some(namespace) = &outcome.namespace {
        println!("Ontology namespace: {namespace}");
    }

    let summary = &outcome.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Ontology concepts"),
        Cell::new(summary.ontology_concepts),
    ]);
    table.add_row(vec![
        Cell::new("Taxonomy concepts"),
        Cell::new(summary.taxonomy_concepts),
    ]);
    table.add_row(vec![
        Cell::new("Mappings found"),
        count_cell(summary.mappings, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Ontology concepts mapped"),
        Cell::new(summary.mapped_ontology_concepts),
    ]);
    table.add_row(vec![
        Cell::new("Taxonomy concepts mapped"),
        Cell::new(summary.mapped_taxonomy_concepts),
    ]);
    table.add_row(vec![
        Cell::new("Unmapped ontology concepts"),
        count_cell(summary.unmapped_ontology_concepts, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unmapped taxonomy concepts"),
        count_cell(summary.unmapped_taxonomy_concepts, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Mean similarity"),
        score_cell(summary.mean_similarity),
    ]);
    table.add_row(vec![
        Cell::new("Median similarity"),
        score_cell(summary.median_similarity),
    ]);
    println!("{table}");

    let mut wrote_any = false;
    if let Some(path) = &outcome.paths.mappings {
        println!("Mappings: {}", path.display());
        wrote_any = true;
    }
    if let Some(path) = &outcome.paths.ontology_gaps {
        println!("Ontology gaps: {}", path.display());
        wrote_any = true;
    }
    if let Some(path) = &outcome.paths.taxonomy_gaps {
        println!("Taxonomy gaps: {}", path.display());
        wrote_any = true;
    }
    if !wrote_any && summary.mappings == 0 {
        println!("No mappings at or above the threshold.");
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).fg(Color::DarkGrey)
    }
}

fn score_cell(value: Option<f64>) -> Cell {
    match value {
        Some(score) => Cell::new(format!("{score:.3}")),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
