//! # Table Grid
//!
//! An immutable model of a sectioned table (head, body, foot) and the edits
//! and movements an editor performs on it.
//!
//! - [`model`]: the values themselves, plus [`CellLocation`] and [`Selection`].
//! - [`state`]: pure operations returning a new [`TableState`].
//! - [`navigation`]: neighbour lookups for moving a cursor.
//! - [`edit`]: serializable edits that replay the state operations.

pub mod edit;
pub mod model;
pub mod navigation;
pub mod state;

pub use edit::{apply_edits, TableEdit};
pub use model::{Cell, CellLocation, CellTag, Row, RowLocation, Section, Selection, TableState};
pub use navigation::{navigate, CellMove};
pub use state::{
    create_table, delete_column, delete_row, get_cell, get_cell_attribute, get_first_row, get_row,
    insert_column, insert_row, is_cell_selected, is_empty_row, is_empty_table_section,
    toggle_section, update_selected_cell,
};
