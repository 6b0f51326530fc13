//! Table values: sections, rows, cells and the ways to address them.

use crate::error::TabulaError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A named group of rows, ordered top to bottom as head, body, foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Head,
    Body,
    Foot,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Head, Section::Body, Section::Foot];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Head => "head",
            Section::Body => "body",
            Section::Foot => "foot",
        }
    }

    /// Tag for new cells created in this section.
    pub fn cell_tag(self) -> CellTag {
        match self {
            Section::Head => CellTag::Th,
            Section::Body | Section::Foot => CellTag::Td,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = TabulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| TabulaError::UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellTag {
    #[default]
    Td,
    Th,
}

impl CellTag {
    pub fn as_str(self) -> &'static str {
        match self {
            CellTag::Td => "td",
            CellTag::Th => "th",
        }
    }
}

/// One table cell.
///
/// Attributes without a dedicated field are kept in `attributes` so a cell
/// survives a JSON round trip unchanged. Spans keep whatever JSON value they
/// arrived as, since HTML-sourced attributes carry them as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tag: CellTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colspan: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rowspan: Option<Value>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl Cell {
    /// An empty cell with the given tag.
    pub fn empty(tag: CellTag) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_align(mut self, align: impl Into<String>) -> Self {
        self.align = Some(align.into());
        self
    }

    /// Reads any attribute by its JSON name.
    pub fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "content" => Some(Value::String(self.content.clone())),
            "tag" => Some(Value::String(self.tag.as_str().to_string())),
            "scope" => self.scope.clone().map(Value::String),
            "align" => self.align.clone().map(Value::String),
            "colspan" => self.colspan.clone(),
            "rowspan" => self.rowspan.clone(),
            other => self.attributes.get(other).cloned(),
        }
    }

    /// Returns a copy with `patch` merged over this cell's attributes.
    ///
    /// A `null` in the patch removes that attribute. Values that don't fit a
    /// known attribute's type leave the cell unchanged.
    pub fn merged(&self, patch: &Map<String, Value>) -> Cell {
        let mut object = match serde_json::to_value(self) {
            Ok(Value::Object(object)) => object,
            _ => return self.clone(),
        };
        for (key, value) in patch {
            if value.is_null() {
                object.remove(key);
            } else {
                object.insert(key.clone(), value.clone());
            }
        }
        match serde_json::from_value(Value::Object(object)) {
            Ok(cell) => cell,
            Err(err) => {
                tracing::debug!(%err, "ignoring cell patch that does not fit");
                self.clone()
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

/// A whole table. An absent section and an empty one are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableState {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub head: Vec<Row>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Row>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub foot: Vec<Row>,
}

impl TableState {
    pub fn section(&self, section: Section) -> &[Row] {
        match section {
            Section::Head => &self.head,
            Section::Body => &self.body,
            Section::Foot => &self.foot,
        }
    }

    /// A new table with `section` replaced by `rows` and the rest copied.
    pub fn with_section(&self, section: Section, rows: Vec<Row>) -> TableState {
        let mut next = self.clone();
        match section {
            Section::Head => next.head = rows,
            Section::Body => next.body = rows,
            Section::Foot => next.foot = rows,
        }
        next
    }

    /// A new table built by mapping every section's rows.
    pub fn map_sections<F>(&self, mut map: F) -> TableState
    where
        F: FnMut(Section, &[Row]) -> Vec<Row>,
    {
        TableState {
            head: map(Section::Head, &self.head),
            body: map(Section::Body, &self.body),
            foot: map(Section::Foot, &self.foot),
        }
    }
}

/// Address of one cell. Cells never carry their own location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellLocation {
    #[serde(rename = "sectionName")]
    pub section: Section,
    pub row_index: usize,
    pub column_index: usize,
}

impl CellLocation {
    pub fn new(section: Section, row_index: usize, column_index: usize) -> Self {
        Self {
            section,
            row_index,
            column_index,
        }
    }

    pub fn row(&self) -> RowLocation {
        RowLocation::new(self.section, self.row_index)
    }
}

/// Address of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowLocation {
    #[serde(rename = "sectionName")]
    pub section: Section,
    pub row_index: usize,
}

impl RowLocation {
    pub fn new(section: Section, row_index: usize) -> Self {
        Self { section, row_index }
    }

    pub fn cell(&self, column_index: usize) -> CellLocation {
        CellLocation::new(self.section, self.row_index, column_index)
    }
}

/// What the user has selected in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Selection {
    /// A single cell.
    Cell(CellLocation),
    /// Every cell at this column index, across all sections and rows.
    #[serde(rename_all = "camelCase")]
    Column { column_index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn section_names_parse() {
        assert_eq!("foot".parse::<Section>().unwrap(), Section::Foot);
        assert!(matches!(
            "caption".parse::<Section>(),
            Err(TabulaError::UnknownSection(name)) if name == "caption"
        ));
    }

    #[test]
    fn cell_round_trips_unknown_attributes() {
        let raw = json!({ "content": "x", "tag": "td", "align": "right", "testAttr": "testVal" });
        let cell: Cell = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(cell.align.as_deref(), Some("right"));
        assert_eq!(cell.attribute("testAttr"), Some(json!("testVal")));
        assert_eq!(serde_json::to_value(&cell).unwrap(), raw);
    }

    #[test]
    fn cell_attribute_reads_known_fields() {
        let cell = Cell::empty(CellTag::Th).with_content("a").with_align("center");
        assert_eq!(cell.attribute("tag"), Some(json!("th")));
        assert_eq!(cell.attribute("content"), Some(json!("a")));
        assert_eq!(cell.attribute("align"), Some(json!("center")));
        assert_eq!(cell.attribute("scope"), None);
    }

    #[test]
    fn merged_applies_patch() {
        let cell = Cell::empty(CellTag::Td).with_align("left");
        let patch = json!({ "content": "new", "align": null, "className": "wide" });
        let merged = cell.merged(patch.as_object().unwrap());
        assert_eq!(merged.content, "new");
        assert_eq!(merged.align, None);
        assert_eq!(merged.attribute("className"), Some(json!("wide")));
    }

    #[test]
    fn merged_rejects_ill_typed_patch() {
        let cell = Cell::empty(CellTag::Td);
        let patch = json!({ "tag": "caption" });
        assert_eq!(cell.merged(patch.as_object().unwrap()), cell);
    }

    #[test]
    fn spans_keep_their_json_type() {
        let raw = json!({ "content": "x", "tag": "td", "colspan": "2", "rowspan": 3 });
        let cell: Cell = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(cell.attribute("colspan"), Some(json!("2")));
        assert_eq!(cell.attribute("rowspan"), Some(json!(3)));
        assert_eq!(serde_json::to_value(&cell).unwrap(), raw);

        let patch = json!({ "colspan": "4" });
        let merged = Cell::empty(CellTag::Td).merged(patch.as_object().unwrap());
        assert_eq!(merged.colspan, Some(json!("4")));
    }

    #[test]
    fn table_state_serializes_present_sections_only() {
        let state = TableState {
            body: vec![Row::new(vec![Cell::empty(CellTag::Td)])],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({ "body": [{ "cells": [{ "content": "", "tag": "td" }] }] })
        );
    }

    #[test]
    fn selection_json_shape() {
        let cell: Selection = serde_json::from_value(json!({
            "type": "cell", "sectionName": "body", "rowIndex": 1, "columnIndex": 2
        }))
        .unwrap();
        assert_eq!(cell, Selection::Cell(CellLocation::new(Section::Body, 1, 2)));

        let column: Selection =
            serde_json::from_value(json!({ "type": "column", "columnIndex": 0 })).unwrap();
        assert_eq!(column, Selection::Column { column_index: 0 });
    }
}
