//! Filter evaluation.
//!
//! A [`Filter`] entry compares one field's value against the entry's value
//! with an [`Operator`]. The set operators see both sides as sets of members
//! (see [`FieldValue::members`]): a list is its items, `Null` is empty and any
//! other scalar is a set of one.

use super::operator::Operator;
use super::value::FieldValue;
use super::view::Filter;

impl Filter {
    /// Whether this entry narrows anything at all.
    ///
    /// Set operators need at least one member to compare against; `is` and
    /// `isNot` need a value.
    pub fn is_active(&self) -> bool {
        match (&self.value, self.operator) {
            (None, _) => false,
            (Some(_), Operator::Is | Operator::IsNot) => true,
            (Some(value), _) => !value.members().is_empty(),
        }
    }

    /// Check if an item whose field holds `field_value` passes this entry.
    ///
    /// An inactive entry lets everything through.
    pub fn matches(&self, field_value: &FieldValue) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(wanted) = &self.value else {
            return true;
        };

        match self.operator {
            Operator::Is => field_value == wanted,
            Operator::IsNot => field_value != wanted,
            Operator::IsAny => any_member(field_value, wanted),
            Operator::IsNone => !any_member(field_value, wanted),
            Operator::IsAll => wanted
                .members()
                .iter()
                .all(|member| field_value.has_member(member)),
            // Every wanted member is absent, which is stricter than !IsAll.
            Operator::IsNotAll => wanted
                .members()
                .iter()
                .all(|member| !field_value.has_member(member)),
        }
    }
}

fn any_member(field_value: &FieldValue, wanted: &FieldValue) -> bool {
    wanted
        .members()
        .iter()
        .any(|member| field_value.has_member(member))
}
