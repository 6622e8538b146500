use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use sidecar_core::{NthOfTypeResult, Position};
use sidecar_model::{MISSING_PLACEHOLDER, property_text};

pub fn print_summary(result: &NthOfTypeResult) {
    println!("Sort: {} ({})", result.sort, result.representation);
    println!("Group by: {}", result.group);
    if result.ordered.is_empty() {
        println!("No sidecars found.");
        return;
    }
    println!("{}", summary_table(result));
    println!("{}", footer(result));
}

/// Table with one row per sidecar, grouped and numbered.
pub fn summary_table(result: &NthOfTypeResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("#"),
        header_cell("Ordinal"),
        header_cell("Sort value"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    let property = result.sort.property();
    for position in result.positions() {
        table.add_row(vec![
            group_cell(&position),
            Cell::new(position.index),
            ordinal_cell(&position),
            sort_value_cell(&position, property),
            Cell::new(position.sidecar.path().display()),
        ]);
    }
    table
}

/// One-line totals shown under the table.
pub fn footer(result: &NthOfTypeResult) -> String {
    let mut line = format!(
        "{} sidecar(s) in {} group(s); {} compared as {}",
        result.ordered.len(),
        result.groups.len(),
        result.sort.property(),
        result.representation
    );
    if result.missing > 0 {
        line.push_str(&format!(", {} missing (placed last)", result.missing));
    }
    line
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ColumnConstraint::LowerBoundary(Width::Fixed(3)),
        ColumnConstraint::LowerBoundary(Width::Fixed(7)),
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::UpperBoundary(Width::Percentage(45)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn group_cell(position: &Position<'_>) -> Cell {
    if position.is_first() {
        let cell = Cell::new(position.key.to_string()).add_attribute(Attribute::Bold);
        if position.key.has_missing() {
            cell.fg(Color::Yellow)
        } else {
            cell.fg(Color::Blue)
        }
    } else {
        dim_cell("")
    }
}

fn ordinal_cell(position: &Position<'_>) -> Cell {
    if position.group_size > 1 {
        Cell::new(&position.ordinal).fg(Color::Green)
    } else {
        Cell::new(&position.ordinal)
    }
}

fn sort_value_cell(position: &Position<'_>, property: &str) -> Cell {
    match position.sidecar.property(property) {
        Some(value) => Cell::new(property_text(value)),
        None => dim_cell(MISSING_PLACEHOLDER),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
