//! Pure operations on [`TableState`].
//!
//! Every operation takes the current table by reference and returns a new
//! one. Inputs are never mutated, so a caller can keep the previous state for
//! undo or comparison.

use super::model::{Cell, CellLocation, CellTag, Row, RowLocation, Section, Selection, TableState};
use serde_json::Value;

/// A body-only table of `row_count` rows, each with `column_count` empty
/// `td` cells.
pub fn create_table(row_count: usize, column_count: usize) -> TableState {
    let row = Row::new(vec![Cell::empty(CellTag::Td); column_count]);
    TableState {
        body: vec![row; row_count],
        ..Default::default()
    }
}

/// The first row of the first non-empty section, in head, body, foot order.
pub fn get_first_row(state: &TableState) -> Option<&Row> {
    Section::ALL
        .into_iter()
        .map(|section| state.section(section))
        .find(|rows| !is_empty_table_section(rows))
        .and_then(|rows| rows.first())
}

pub fn get_row(state: &TableState, location: RowLocation) -> Option<&Row> {
    state.section(location.section).get(location.row_index)
}

pub fn get_cell<'a>(state: &'a TableState, location: &CellLocation) -> Option<&'a Cell> {
    get_row(state, location.row())?.cells.get(location.column_index)
}

/// The named attribute of the cell at `location`, if both exist.
pub fn get_cell_attribute(
    state: &TableState,
    location: &CellLocation,
    name: &str,
) -> Option<Value> {
    get_cell(state, location)?.attribute(name)
}

/// Whether the cell at `location` is covered by `selection`.
///
/// A column selection matches on column index alone; a cell selection needs
/// section, row and column to match.
pub fn is_cell_selected(location: &CellLocation, selection: &Selection) -> bool {
    match selection {
        Selection::Cell(selected) => selected == location,
        Selection::Column { column_index } => *column_index == location.column_index,
    }
}

/// Replaces every selected cell with `update(cell)`.
///
/// With no selection, or a selection that covers no cell, the result equals
/// the input.
pub fn update_selected_cell<F>(
    state: &TableState,
    selection: Option<&Selection>,
    update: F,
) -> TableState
where
    F: Fn(&Cell) -> Cell,
{
    let Some(selection) = selection else {
        return state.clone();
    };

    state.map_sections(|section, rows| {
        rows.iter()
            .enumerate()
            .map(|(row_index, row)| {
                let cells = row
                    .cells
                    .iter()
                    .enumerate()
                    .map(|(column_index, cell)| {
                        let location = CellLocation::new(section, row_index, column_index);
                        if is_cell_selected(&location, selection) {
                            update(cell)
                        } else {
                            cell.clone()
                        }
                    })
                    .collect();
                Row::new(cells)
            })
            .collect()
    })
}

/// Inserts an empty row at `location`.
///
/// The cell count is `column_count` when given, otherwise the cell count of
/// [`get_first_row`]. A count of zero leaves the table unchanged. Each new
/// cell copies `align` from the first row's cell in the same column.
pub fn insert_row(
    state: &TableState,
    location: RowLocation,
    column_count: Option<usize>,
) -> TableState {
    let first_row = get_first_row(state);
    let cell_count = column_count.or_else(|| first_row.map(|row| row.cells.len()));
    let Some(cell_count) = cell_count.filter(|count| *count > 0) else {
        tracing::debug!(section = %location.section, "no columns to insert a row with");
        return state.clone();
    };

    let tag = location.section.cell_tag();
    let cells = (0..cell_count)
        .map(|column_index| {
            let mut cell = Cell::empty(tag);
            cell.align = first_row
                .and_then(|row| row.cells.get(column_index))
                .and_then(|cell| cell.align.clone());
            cell
        })
        .collect();

    let mut rows = state.section(location.section).to_vec();
    let at = location.row_index.min(rows.len());
    rows.insert(at, Row::new(cells));
    state.with_section(location.section, rows)
}

/// Removes the row at `location`. Out of range indices change nothing.
pub fn delete_row(state: &TableState, location: RowLocation) -> TableState {
    let rows = state
        .section(location.section)
        .iter()
        .enumerate()
        .filter(|(row_index, _)| *row_index != location.row_index)
        .map(|(_, row)| row.clone())
        .collect();
    state.with_section(location.section, rows)
}

/// Inserts an empty cell at `column_index` in every row that can take one.
///
/// Empty sections and empty rows are left alone, as are rows with fewer than
/// `column_index` cells.
pub fn insert_column(state: &TableState, column_index: usize) -> TableState {
    state.map_sections(|section, rows| {
        if is_empty_table_section(rows) {
            return rows.to_vec();
        }
        rows.iter()
            .map(|row| {
                if is_empty_row(row) || row.cells.len() < column_index {
                    return row.clone();
                }
                let mut cells = row.cells.clone();
                cells.insert(column_index, Cell::empty(section.cell_tag()));
                Row::new(cells)
            })
            .collect()
    })
}

/// Removes the cell at `column_index` from every row that has one. Rows left
/// without cells are dropped.
pub fn delete_column(state: &TableState, column_index: usize) -> TableState {
    state.map_sections(|_, rows| {
        if is_empty_table_section(rows) {
            return rows.to_vec();
        }
        rows.iter()
            .map(|row| {
                let mut cells = row.cells.clone();
                if column_index < cells.len() {
                    cells.remove(column_index);
                }
                Row::new(cells)
            })
            .filter(|row| !is_empty_row(row))
            .collect()
    })
}

/// Empties `section` if it has cells, otherwise gives it one row as wide as
/// the first body row (or one cell when the body is empty).
pub fn toggle_section(state: &TableState, section: Section) -> TableState {
    if !is_empty_table_section(state.section(section)) {
        return state.with_section(section, Vec::new());
    }
    let column_count = state.body.first().map_or(1, |row| row.cells.len());
    insert_row(state, RowLocation::new(section, 0), Some(column_count))
}

/// A section is empty when none of its rows has a cell.
pub fn is_empty_table_section(rows: &[Row]) -> bool {
    rows.iter().all(is_empty_row)
}

pub fn is_empty_row(row: &Row) -> bool {
    row.cells.is_empty()
}
