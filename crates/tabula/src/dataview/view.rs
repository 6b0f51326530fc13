//! The view descriptor: what a caller wants to see of a collection.

use super::operator::Operator;
use super::value::FieldValue;
use crate::config::TabulaConfig;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Orients an ascending ordering in this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    /// Unset means [`SortDirection::Desc`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

/// One filter entry of a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub operator: Operator,
    /// A list for the set operators, a scalar for `is`/`isNot`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
}

impl Filter {
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<FieldValue>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: Some(value.into()),
        }
    }

    /// A filter entry with no value yet; the engine treats it as a no-op.
    pub fn unset(field: impl Into<String>, operator: Operator) -> Self {
        Self {
            field: field.into(),
            operator,
            value: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
    /// 1-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec {
            field: field.into(),
            direction: Some(direction),
        });
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    /// Fills the gaps a caller left open using configured defaults.
    ///
    /// A requested page without a page size gets `config.per_page`, and a sort
    /// without a direction gets `config.sort_direction()`. A view that asks
    /// for no page stays unpaginated.
    pub fn with_defaults(mut self, config: &TabulaConfig) -> Self {
        if self.page.is_some() && self.per_page.is_none() {
            self.per_page = Some(config.per_page);
        }
        if let Some(sort) = self.sort.as_mut() {
            sort.direction.get_or_insert(config.sort_direction());
        }
        self
    }
}

/// Pagination metadata for a computed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub total_items: usize,
    pub total_pages: usize,
}
