//! Keyboard-style movement between cells.
//!
//! Every function starts from an existing cell and returns the location of
//! another existing cell, or `None` when there is nowhere to go. A start
//! location that names no cell also gives `None`.
//!
//! Moving up or down past the edge of a section continues into the nearest
//! non-empty section in that direction, landing on the same column only if the
//! target row is wide enough.

use super::model::{CellLocation, RowLocation, Section, TableState};
use super::state::{get_cell, get_row, is_empty_table_section};
use crate::error::TabulaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named movement, as bound to a key or requested from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellMove {
    Up,
    Down,
    Left,
    Right,
    RowStart,
    RowEnd,
    ColumnStart,
    ColumnEnd,
    TableStart,
    TableEnd,
}

impl CellMove {
    pub const ALL: [CellMove; 10] = [
        CellMove::Up,
        CellMove::Down,
        CellMove::Left,
        CellMove::Right,
        CellMove::RowStart,
        CellMove::RowEnd,
        CellMove::ColumnStart,
        CellMove::ColumnEnd,
        CellMove::TableStart,
        CellMove::TableEnd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CellMove::Up => "up",
            CellMove::Down => "down",
            CellMove::Left => "left",
            CellMove::Right => "right",
            CellMove::RowStart => "rowStart",
            CellMove::RowEnd => "rowEnd",
            CellMove::ColumnStart => "columnStart",
            CellMove::ColumnEnd => "columnEnd",
            CellMove::TableStart => "tableStart",
            CellMove::TableEnd => "tableEnd",
        }
    }
}

impl fmt::Display for CellMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CellMove {
    type Err = TabulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellMove::ALL
            .into_iter()
            .find(|movement| movement.as_str() == s)
            .ok_or_else(|| TabulaError::UnknownMove(s.to_string()))
    }
}

/// Applies `movement` from `from`.
pub fn navigate(
    state: &TableState,
    from: &CellLocation,
    movement: CellMove,
) -> Option<CellLocation> {
    match movement {
        CellMove::Up => get_cell_above(state, from),
        CellMove::Down => get_cell_below(state, from),
        CellMove::Left => get_cell_to_left(state, from),
        CellMove::Right => get_cell_to_right(state, from),
        CellMove::RowStart => get_first_cell_in_row(state, from),
        CellMove::RowEnd => get_last_cell_in_row(state, from),
        CellMove::ColumnStart => get_first_cell_in_column(state, from),
        CellMove::ColumnEnd => get_last_cell_in_column(state, from),
        CellMove::TableStart => {
            get_cell(state, from)?;
            get_first_cell_in_table(state)
        }
        CellMove::TableEnd => {
            get_cell(state, from)?;
            get_last_cell_in_table(state)
        }
    }
}

fn existing(state: &TableState, location: CellLocation) -> Option<CellLocation> {
    get_cell(state, &location).map(|_| location)
}

fn non_empty_sections(state: &TableState) -> impl DoubleEndedIterator<Item = Section> + '_ {
    Section::ALL
        .into_iter()
        .filter(move |section| !is_empty_table_section(state.section(*section)))
}

pub fn get_cell_above(state: &TableState, from: &CellLocation) -> Option<CellLocation> {
    get_cell(state, from)?;
    if let Some(row_index) = from.row_index.checked_sub(1) {
        return existing(state, CellLocation { row_index, ..*from });
    }
    let section = non_empty_sections(state)
        .rev()
        .find(|section| *section < from.section)?;
    let row_index = state.section(section).len() - 1;
    existing(state, CellLocation::new(section, row_index, from.column_index))
}

pub fn get_cell_below(state: &TableState, from: &CellLocation) -> Option<CellLocation> {
    get_cell(state, from)?;
    let row_index = from.row_index + 1;
    if row_index < state.section(from.section).len() {
        return existing(state, CellLocation { row_index, ..*from });
    }
    let section = non_empty_sections(state).find(|section| *section > from.section)?;
    existing(state, CellLocation::new(section, 0, from.column_index))
}

pub fn get_cell_to_left(state: &TableState, from: &CellLocation) -> Option<CellLocation> {
    get_cell(state, from)?;
    let column_index = from.column_index.checked_sub(1)?;
    existing(state, CellLocation { column_index, ..*from })
}

pub fn get_cell_to_right(state: &TableState, from: &CellLocation) -> Option<CellLocation> {
    get_cell(state, from)?;
    existing(
        state,
        CellLocation {
            column_index: from.column_index + 1,
            ..*from
        },
    )
}

pub fn get_first_cell_in_row(state: &TableState, from: &CellLocation) -> Option<CellLocation> {
    get_cell(state, from)?;
    Some(from.row().cell(0))
}

pub fn get_last_cell_in_row(state: &TableState, from: &CellLocation) -> Option<CellLocation> {
    let row = get_row(state, from.row())?;
    get_cell(state, from)?;
    Some(from.row().cell(row.cells.len() - 1))
}

/// The topmost cell in `from`'s column, across all sections.
pub fn get_first_cell_in_column(state: &TableState, from: &CellLocation) -> Option<CellLocation> {
    get_cell(state, from)?;
    column_cells(state, from.column_index).next()
}

/// The bottommost cell in `from`'s column, across all sections.
pub fn get_last_cell_in_column(state: &TableState, from: &CellLocation) -> Option<CellLocation> {
    get_cell(state, from)?;
    column_cells(state, from.column_index).last()
}

fn column_cells(
    state: &TableState,
    column_index: usize,
) -> impl Iterator<Item = CellLocation> + '_ {
    Section::ALL.into_iter().flat_map(move |section| {
        state
            .section(section)
            .iter()
            .enumerate()
            .filter(move |(_, row)| column_index < row.cells.len())
            .map(move |(row_index, _)| CellLocation::new(section, row_index, column_index))
    })
}

/// First row of the first non-empty section.
pub fn get_first_row_location(state: &TableState) -> Option<RowLocation> {
    let section = non_empty_sections(state).next()?;
    Some(RowLocation::new(section, 0))
}

/// Last row of the last non-empty section.
pub fn get_last_row_location(state: &TableState) -> Option<RowLocation> {
    let section = non_empty_sections(state).next_back()?;
    Some(RowLocation::new(section, state.section(section).len() - 1))
}

/// Rows that hold at least one cell, top to bottom across sections.
fn rows_with_cells(state: &TableState) -> impl DoubleEndedIterator<Item = RowLocation> + '_ {
    Section::ALL.into_iter().flat_map(move |section| {
        state
            .section(section)
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.cells.is_empty())
            .map(move |(row_index, _)| RowLocation::new(section, row_index))
    })
}

pub fn get_first_cell_in_table(state: &TableState) -> Option<CellLocation> {
    Some(rows_with_cells(state).next()?.cell(0))
}

pub fn get_last_cell_in_table(state: &TableState) -> Option<CellLocation> {
    let location = rows_with_cells(state).next_back()?;
    let width = get_row(state, location)?.cells.len();
    Some(location.cell(width - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::state::{create_table, toggle_section};
    use serde_json::json;

    fn at(section: Section, row_index: usize, column_index: usize) -> CellLocation {
        CellLocation::new(section, row_index, column_index)
    }

    /// A 1-row head, 2x3 body and 1-row foot.
    fn full_table() -> TableState {
        let state = create_table(2, 3);
        let state = toggle_section(&state, Section::Head);
        toggle_section(&state, Section::Foot)
    }

    #[test]
    fn moves_within_a_section() {
        let state = full_table();
        assert_eq!(get_cell_below(&state, &at(Section::Body, 0, 1)), Some(at(Section::Body, 1, 1)));
        assert_eq!(get_cell_above(&state, &at(Section::Body, 1, 1)), Some(at(Section::Body, 0, 1)));
        let from = at(Section::Body, 0, 1);
        assert_eq!(get_cell_to_left(&state, &from), Some(at(Section::Body, 0, 0)));
        assert_eq!(get_cell_to_right(&state, &from), Some(at(Section::Body, 0, 2)));
    }

    #[test]
    fn crosses_section_boundaries() {
        let state = full_table();
        assert_eq!(get_cell_above(&state, &at(Section::Body, 0, 2)), Some(at(Section::Head, 0, 2)));
        assert_eq!(get_cell_below(&state, &at(Section::Head, 0, 2)), Some(at(Section::Body, 0, 2)));
        assert_eq!(get_cell_below(&state, &at(Section::Body, 1, 0)), Some(at(Section::Foot, 0, 0)));
        assert_eq!(get_cell_above(&state, &at(Section::Foot, 0, 0)), Some(at(Section::Body, 1, 0)));
    }

    #[test]
    fn skips_empty_sections() {
        let state = toggle_section(&full_table(), Section::Body);
        assert!(state.body.is_empty());
        assert_eq!(get_cell_below(&state, &at(Section::Head, 0, 1)), Some(at(Section::Foot, 0, 1)));
        assert_eq!(get_cell_above(&state, &at(Section::Foot, 0, 1)), Some(at(Section::Head, 0, 1)));
    }

    #[test]
    fn stops_at_table_edges() {
        let state = full_table();
        assert_eq!(get_cell_above(&state, &at(Section::Head, 0, 0)), None);
        assert_eq!(get_cell_below(&state, &at(Section::Foot, 0, 0)), None);
        assert_eq!(get_cell_to_left(&state, &at(Section::Body, 0, 0)), None);
        assert_eq!(get_cell_to_right(&state, &at(Section::Body, 0, 2)), None);
    }

    #[test]
    fn narrow_neighbour_row_blocks_vertical_move() {
        let state: TableState = serde_json::from_value(json!({
            "head": [{ "cells": [{ "content": "", "tag": "th" }] }],
            "body": [{ "cells": [{ "content": "", "tag": "td" }, { "content": "", "tag": "td" }] }]
        }))
        .unwrap();
        assert_eq!(get_cell_above(&state, &at(Section::Body, 0, 1)), None);
        assert_eq!(get_cell_above(&state, &at(Section::Body, 0, 0)), Some(at(Section::Head, 0, 0)));
    }

    #[test]
    fn missing_start_cell_goes_nowhere() {
        let state = full_table();
        let outside = at(Section::Body, 9, 9);
        for movement in CellMove::ALL {
            assert_eq!(navigate(&state, &outside, movement), None, "{movement}");
        }
    }

    #[test]
    fn row_and_column_ends() {
        let state = full_table();
        let from = at(Section::Body, 1, 1);
        assert_eq!(get_first_cell_in_row(&state, &from), Some(at(Section::Body, 1, 0)));
        assert_eq!(get_last_cell_in_row(&state, &from), Some(at(Section::Body, 1, 2)));
        assert_eq!(get_first_cell_in_column(&state, &from), Some(at(Section::Head, 0, 1)));
        assert_eq!(get_last_cell_in_column(&state, &from), Some(at(Section::Foot, 0, 1)));
    }

    #[test]
    fn column_ends_skip_short_rows() {
        let state: TableState = serde_json::from_value(json!({
            "head": [{ "cells": [{ "content": "", "tag": "th" }] }],
            "body": [{ "cells": [{ "content": "", "tag": "td" }, { "content": "", "tag": "td" }] }],
            "foot": [{ "cells": [{ "content": "", "tag": "td" }] }]
        }))
        .unwrap();
        let from = at(Section::Body, 0, 1);
        assert_eq!(get_first_cell_in_column(&state, &from), Some(from));
        assert_eq!(get_last_cell_in_column(&state, &from), Some(from));
    }

    #[test]
    fn table_ends() {
        let state = full_table();
        assert_eq!(get_first_row_location(&state), Some(RowLocation::new(Section::Head, 0)));
        assert_eq!(get_last_row_location(&state), Some(RowLocation::new(Section::Foot, 0)));
        assert_eq!(get_first_cell_in_table(&state), Some(at(Section::Head, 0, 0)));
        assert_eq!(get_last_cell_in_table(&state), Some(at(Section::Foot, 0, 2)));

        let empty = TableState::default();
        assert_eq!(get_first_row_location(&empty), None);
        assert_eq!(get_first_cell_in_table(&empty), None);
        assert_eq!(get_last_cell_in_table(&empty), None);
    }

    #[test]
    fn table_ends_skip_empty_rows() {
        let state: TableState = serde_json::from_value(json!({
            "head": [{ "cells": [] }, { "cells": [{ "content": "a", "tag": "th" }] }],
            "body": [
                { "cells": [{ "content": "", "tag": "td" }, { "content": "", "tag": "td" }] },
                { "cells": [] }
            ]
        }))
        .unwrap();
        assert_eq!(get_first_cell_in_table(&state), Some(at(Section::Head, 1, 0)));
        assert_eq!(get_last_cell_in_table(&state), Some(at(Section::Body, 0, 1)));
        assert_eq!(
            navigate(&state, &at(Section::Body, 0, 0), CellMove::TableStart),
            Some(at(Section::Head, 1, 0))
        );
    }

    #[test]
    fn navigate_dispatches_named_moves() {
        let state = create_table(2, 2);
        let from = at(Section::Body, 0, 0);
        assert_eq!(navigate(&state, &from, CellMove::Down), Some(at(Section::Body, 1, 0)));
        assert_eq!(navigate(&state, &from, CellMove::TableEnd), Some(at(Section::Body, 1, 1)));
        assert_eq!(navigate(&state, &from, CellMove::RowEnd), Some(at(Section::Body, 0, 1)));
    }

    #[test]
    fn move_names_parse() {
        assert_eq!("columnEnd".parse::<CellMove>().unwrap(), CellMove::ColumnEnd);
        assert!(matches!("sideways".parse::<CellMove>(), Err(TabulaError::UnknownMove(_))));
    }
}
