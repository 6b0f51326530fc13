//! Serializable table edits.
//!
//! A [`TableEdit`] names one state operation with its arguments, so a batch
//! of edits can be read from JSON and replayed against a table.

use super::model::{RowLocation, Section, Selection, TableState};
use super::state;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TableEdit {
    #[serde(rename_all = "camelCase")]
    InsertRow {
        #[serde(rename = "sectionName")]
        section: Section,
        row_index: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        column_count: Option<usize>,
    },
    #[serde(rename_all = "camelCase")]
    DeleteRow {
        #[serde(rename = "sectionName")]
        section: Section,
        row_index: usize,
    },
    #[serde(rename_all = "camelCase")]
    InsertColumn { column_index: usize },
    #[serde(rename_all = "camelCase")]
    DeleteColumn { column_index: usize },
    ToggleSection {
        #[serde(rename = "sectionName")]
        section: Section,
    },
    /// Merges `attributes` into every cell covered by `selection`.
    UpdateCells {
        selection: Selection,
        attributes: Map<String, Value>,
    },
}

impl TableEdit {
    pub fn apply(&self, table: &TableState) -> TableState {
        tracing::debug!(edit = ?self, "applying table edit");
        match self {
            TableEdit::InsertRow {
                section,
                row_index,
                column_count,
            } => state::insert_row(table, RowLocation::new(*section, *row_index), *column_count),
            TableEdit::DeleteRow { section, row_index } => {
                state::delete_row(table, RowLocation::new(*section, *row_index))
            }
            TableEdit::InsertColumn { column_index } => state::insert_column(table, *column_index),
            TableEdit::DeleteColumn { column_index } => state::delete_column(table, *column_index),
            TableEdit::ToggleSection { section } => state::toggle_section(table, *section),
            TableEdit::UpdateCells {
                selection,
                attributes,
            } => {
                state::update_selected_cell(table, Some(selection), |cell| cell.merged(attributes))
            }
        }
    }
}

/// Applies `edits` in order.
pub fn apply_edits(table: &TableState, edits: &[TableEdit]) -> TableState {
    edits
        .iter()
        .fold(table.clone(), |current, edit| edit.apply(&current))
}
