//! # Data Views
//!
//! Search, filter, sort and paginate an in-memory collection according to a
//! declarative [`View`].
//!
//! - **Fields** ([`Field`]) describe the attributes of an item and how to read,
//!   render and compare them. [`normalize_fields`] fills in what a caller left out.
//! - **Operators** ([`Operator`]) are the filter comparison modes;
//!   [`sanitize_operators`] reduces a field's declared set to a usable one.
//! - **The engine** ([`filter_sort_and_paginate`]) runs search, filters, sort
//!   and pagination, in that order, and returns a [`PaginatedData`] page.
//!
//! ## Usage
//!
//! ```ignore
//! let fields = vec![
//!     Field::new("title").searchable(true),
//!     Field::new("satellites").field_type(FieldType::Integer),
//! ];
//! let view = View::new()
//!     .search("nep")
//!     .filter(Filter::new("type", Operator::IsAny, vec!["Ice giant"]))
//!     .sort("satellites", SortDirection::Desc)
//!     .paginate(1, 20);
//! let page = filter_sort_and_paginate(Some(items.as_slice()), &view, &fields);
//! ```

mod engine;
mod field;
mod field_type;
mod filter;
mod menu;
mod operator;
mod search;
mod value;
mod view;

pub use engine::{filter_sort_and_paginate, PaginatedData};
pub use field::{
    find_field, normalize_fields, Comparator, Element, Field, FilterBy, NormalizedField, Renderer,
    ValueGetter,
};
pub use field_type::{compare_values, FieldType};
pub use menu::{available_filters, FilterDescriptor};
pub use operator::{sanitize_operators, Operator};
pub use search::{matches_search, normalize_search_input};
pub use value::{FieldValue, Record};
pub use view::{Filter, PaginationInfo, SortDirection, SortSpec, View};
