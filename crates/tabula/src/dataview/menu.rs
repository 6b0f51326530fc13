//! Filter menu descriptors.
//!
//! A UI offering filters needs to know which fields can be filtered, with
//! which operators, and which filters to show without the user asking. This
//! module derives that from the field list and the current view.

use super::field::{Element, Field};
use super::operator::{sanitize_operators, Operator};
use super::view::View;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDescriptor {
    pub field: String,
    pub name: String,
    pub elements: Vec<Element>,
    pub operators: Vec<Operator>,
    pub single_selection: bool,
    pub is_primary: bool,
    pub is_visible: bool,
}

/// One descriptor per field that declares elements and has operators left
/// after sanitizing, in field order.
///
/// A filter is visible when it is primary or when the view already filters
/// that field with one of the field's operators.
pub fn available_filters<T>(fields: &[Field<T>], view: &View) -> Vec<FilterDescriptor> {
    fields
        .iter()
        .filter_map(|field| {
            let elements = field.elements.as_ref().filter(|elements| !elements.is_empty())?;
            let operators = sanitize_operators(field);
            if operators.is_empty() {
                return None;
            }

            let is_primary = field
                .filter_by
                .as_ref()
                .is_some_and(|filter_by| filter_by.is_primary);
            let in_view = view
                .filters
                .iter()
                .any(|filter| filter.field == field.id && operators.contains(&filter.operator));

            Some(FilterDescriptor {
                field: field.id.clone(),
                name: field.label.clone().unwrap_or_else(|| field.id.clone()),
                elements: elements.clone(),
                single_selection: operators.iter().any(|op| op.is_single_selection()),
                operators,
                is_primary,
                is_visible: is_primary || in_view,
            })
        })
        .collect()
}
