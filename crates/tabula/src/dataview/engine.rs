//! # Filter / Sort / Paginate
//!
//! Computes the visible slice of an in-memory collection for a [`View`].
//!
//! The stages always run in this order:
//!
//! 1. **Search**: keep items where some globally searchable field contains the
//!    normalized search string.
//! 2. **Filters**: each entry narrows the survivors (AND across entries).
//! 3. **Sort**: by the view's sort field, with that field's comparator.
//! 4. **Paginate**: slice out the requested page.
//!
//! Unknown field ids in filters or sort are skipped, never an error.

use super::field::{find_field, normalize_fields, Field, NormalizedField};
use super::search::{matches_search, normalize_search_input};
use super::value::Record;
use super::view::{PaginationInfo, View};
use serde::Serialize;

/// A computed page: borrowed items plus pagination metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase", bound(serialize = "T: Serialize"))]
pub struct PaginatedData<'a, T> {
    pub data: Vec<&'a T>,
    pub pagination_info: PaginationInfo,
}

impl<T> PaginatedData<'_, T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            pagination_info: PaginationInfo {
                total_items: 0,
                total_pages: 0,
            },
        }
    }

    /// Clones the page's items out of the source collection.
    pub fn to_owned_items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.iter().map(|item| (*item).clone()).collect()
    }
}

/// Applies `view` to `data` and returns the visible page.
///
/// `None` data yields an empty page with zero pages. `fields` are normalized
/// here; callers do not need to normalize them first.
pub fn filter_sort_and_paginate<'a, T: Record + 'static>(
    data: Option<&'a [T]>,
    view: &View,
    fields: &[Field<T>],
) -> PaginatedData<'a, T> {
    let Some(data) = data else {
        return PaginatedData::empty();
    };
    let fields = normalize_fields(fields);

    let mut filtered: Vec<&'a T> = data.iter().collect();
    filtered = apply_search(filtered, view, &fields);
    filtered = apply_filters(filtered, view, &fields);
    apply_sort(&mut filtered, view, &fields);
    paginate(filtered, view)
}

fn apply_search<'a, T>(
    items: Vec<&'a T>,
    view: &View,
    fields: &[NormalizedField<T>],
) -> Vec<&'a T> {
    if view.search.is_empty() {
        return items;
    }
    let normalized = normalize_search_input(&view.search);
    let kept: Vec<&'a T> = items
        .into_iter()
        .filter(|item| matches_search(*item, fields, &normalized))
        .collect();
    tracing::trace!(search = %normalized, kept = kept.len(), "applied search");
    kept
}

fn apply_filters<'a, T>(
    mut items: Vec<&'a T>,
    view: &View,
    fields: &[NormalizedField<T>],
) -> Vec<&'a T> {
    for filter in &view.filters {
        let Some(field) = find_field(fields, &filter.field) else {
            tracing::debug!(field = %filter.field, "skipping filter on unknown field");
            continue;
        };
        if !filter.is_active() {
            tracing::debug!(
                field = %filter.field,
                operator = %filter.operator,
                "skipping filter without value"
            );
            continue;
        }
        items.retain(|item| filter.matches(&field.value(item)));
        tracing::trace!(
            field = %filter.field,
            operator = %filter.operator,
            kept = items.len(),
            "applied filter"
        );
    }
    items
}

fn apply_sort<T>(items: &mut [&T], view: &View, fields: &[NormalizedField<T>]) {
    let Some(sort) = &view.sort else {
        return;
    };
    let Some(field) = find_field(fields, &sort.field) else {
        tracing::debug!(field = %sort.field, "skipping sort on unknown field");
        return;
    };
    if !field.enable_sorting {
        tracing::debug!(field = %sort.field, "skipping sort on field with sorting disabled");
        return;
    }
    let direction = sort.direction.unwrap_or_default();
    items.sort_by(|a, b| field.compare(a, b, direction));
}

fn paginate<'a, T>(items: Vec<&'a T>, view: &View) -> PaginatedData<'a, T> {
    let total_items = items.len();
    let (Some(page), Some(per_page)) = (view.page, view.per_page.filter(|n| *n > 0)) else {
        return PaginatedData {
            data: items,
            pagination_info: PaginationInfo {
                total_items,
                total_pages: 1,
            },
        };
    };

    let start = page.saturating_sub(1).saturating_mul(per_page);
    let data = items.into_iter().skip(start).take(per_page).collect();
    PaginatedData {
        data,
        pagination_info: PaginationInfo {
            total_items,
            total_pages: total_items.div_ceil(per_page),
        },
    }
}
