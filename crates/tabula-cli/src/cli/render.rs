//! # Rendering
//!
//! Plain-text grids for `tabula table show`, laid out by `comfy-table`.
//! The first head row becomes the table header; every other row follows in
//! section order with a rule between rows.

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell as GridCell, CellAlignment, Table};
use tabula::table::{Cell, Row, Section, TableState};

/// Shown in place of an empty table.
pub const EMPTY_TABLE: &str = "(empty table)";

/// Renders `table` as a boxed grid.
///
/// Rows shorter than the widest row are padded with blank cells.
pub fn render_grid(table: &TableState) -> String {
    let width = Section::ALL
        .into_iter()
        .flat_map(|section| table.section(section))
        .map(|row| row.cells.len())
        .max()
        .unwrap_or(0);
    if width == 0 {
        return format!("{EMPTY_TABLE}\n");
    }

    let mut grid = Table::new();
    grid.load_preset(ASCII_FULL);

    let mut head = table.head.iter();
    if let Some(first) = head.next() {
        grid.set_header(grid_cells(first, width));
    }
    for row in head.chain(&table.body).chain(&table.foot) {
        grid.add_row(grid_cells(row, width));
    }
    format!("{grid}\n")
}

fn grid_cells(row: &Row, width: usize) -> Vec<GridCell> {
    (0..width)
        .map(|index| match row.cells.get(index) {
            Some(cell) => grid_cell(cell),
            None => GridCell::new(""),
        })
        .collect()
}

fn grid_cell(cell: &Cell) -> GridCell {
    let alignment = match cell.align.as_deref() {
        Some("center") => CellAlignment::Center,
        Some("right") => CellAlignment::Right,
        _ => CellAlignment::Left,
    };
    GridCell::new(&cell.content).set_alignment(alignment)
}
