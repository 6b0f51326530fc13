//! Field descriptors and normalization.
//!
//! A [`Field`] describes one displayable, sortable or filterable attribute of
//! an item. Callers may leave out accessors and labels; [`normalize_fields`]
//! turns a field list into [`NormalizedField`]s on which `get_value`, `render`,
//! `sort` and `label` can always be called.
//!
//! Fields deserialize from JSON without accessors:
//!
//! ```ignore
//! let fields: Vec<Field<serde_json::Value>> = serde_json::from_str(json)?;
//! let fields = fields
//!     .into_iter()
//!     .map(|f| if f.id == "author" { f.get_value(author_name) } else { f })
//!     .collect::<Vec<_>>();
//! ```

use super::field_type::{compare_values, FieldType};
use super::value::{FieldValue, Record};
use super::view::SortDirection;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

pub type ValueGetter<T> = Arc<dyn Fn(&T) -> FieldValue + Send + Sync>;
pub type Renderer<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
pub type Comparator<T> = Arc<dyn Fn(&T, &T, SortDirection) -> Ordering + Send + Sync>;

/// One enumerable value of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub value: FieldValue,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Element {
    pub fn new(value: impl Into<FieldValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
        }
    }
}

/// Filtering options declared by a field.
///
/// Operators are kept as raw tokens: declarations come from callers and are
/// validated by [`sanitize_operators`](super::sanitize_operators).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterBy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operators: Option<Vec<String>>,
    #[serde(default)]
    pub is_primary: bool,
}

impl FilterBy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operators<I, S>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators = Some(operators.into_iter().map(Into::into).collect());
        self
    }

    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }
}

fn enabled() -> bool {
    true
}

/// A field descriptor as declared by a caller.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct Field<T> {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(skip)]
    pub get_value: Option<ValueGetter<T>>,
    #[serde(skip)]
    pub render: Option<Renderer<T>>,
    /// Overrides the type comparator.
    #[serde(skip)]
    pub sort: Option<Comparator<T>>,
    #[serde(default = "enabled")]
    pub enable_sorting: bool,
    #[serde(default)]
    pub enable_global_search: bool,
    #[serde(default = "enabled")]
    pub enable_hiding: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<Element>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_by: Option<FilterBy>,
}

impl<T> Field<T> {
    /// A field with every optional setting at its default.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            field_type: None,
            get_value: None,
            render: None,
            sort: None,
            enable_sorting: true,
            enable_global_search: false,
            enable_hiding: true,
            elements: None,
            filter_by: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn get_value<F>(mut self, get_value: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        self.get_value = Some(Arc::new(get_value));
        self
    }

    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn sort<F>(mut self, sort: F) -> Self
    where
        F: Fn(&T, &T, SortDirection) -> Ordering + Send + Sync + 'static,
    {
        self.sort = Some(Arc::new(sort));
        self
    }

    pub fn sortable(mut self, enabled: bool) -> Self {
        self.enable_sorting = enabled;
        self
    }

    pub fn searchable(mut self, enabled: bool) -> Self {
        self.enable_global_search = enabled;
        self
    }

    pub fn hideable(mut self, enabled: bool) -> Self {
        self.enable_hiding = enabled;
        self
    }

    pub fn elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = Some(elements);
        self
    }

    pub fn filter_by(mut self, filter_by: FilterBy) -> Self {
        self.filter_by = Some(filter_by);
        self
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            field_type: self.field_type,
            get_value: self.get_value.clone(),
            render: self.render.clone(),
            sort: self.sort.clone(),
            enable_sorting: self.enable_sorting,
            enable_global_search: self.enable_global_search,
            enable_hiding: self.enable_hiding,
            elements: self.elements.clone(),
            filter_by: self.filter_by.clone(),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("field_type", &self.field_type)
            .field("get_value", &self.get_value.is_some())
            .field("render", &self.render.is_some())
            .field("sort", &self.sort.is_some())
            .field("enable_sorting", &self.enable_sorting)
            .field("enable_global_search", &self.enable_global_search)
            .field("enable_hiding", &self.enable_hiding)
            .field("elements", &self.elements)
            .field("filter_by", &self.filter_by)
            .finish()
    }
}

/// A field whose accessors and label are always present.
pub struct NormalizedField<T> {
    pub id: String,
    pub label: String,
    pub field_type: Option<FieldType>,
    pub get_value: ValueGetter<T>,
    pub render: Renderer<T>,
    pub sort: Comparator<T>,
    pub enable_sorting: bool,
    pub enable_global_search: bool,
    pub enable_hiding: bool,
    pub elements: Option<Vec<Element>>,
    pub filter_by: Option<FilterBy>,
}

impl<T> NormalizedField<T> {
    pub fn value(&self, item: &T) -> FieldValue {
        (self.get_value)(item)
    }

    pub fn rendered(&self, item: &T) -> String {
        (self.render)(item)
    }

    pub fn compare(&self, a: &T, b: &T, direction: SortDirection) -> Ordering {
        (self.sort)(a, b, direction)
    }
}

impl<T> fmt::Debug for NormalizedField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedField")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("field_type", &self.field_type)
            .field("enable_sorting", &self.enable_sorting)
            .field("enable_global_search", &self.enable_global_search)
            .field("enable_hiding", &self.enable_hiding)
            .finish_non_exhaustive()
    }
}

/// Fills in default accessors so every field can be used uniformly.
///
/// - `get_value` defaults to reading `item[id]` through [`Record`].
/// - `render` defaults to the string form of the resolved `get_value`.
/// - `sort` defaults to the field type's comparator over resolved values.
/// - `label` defaults to `id`.
///
/// The output has the same length and order as the input.
pub fn normalize_fields<T: Record + 'static>(fields: &[Field<T>]) -> Vec<NormalizedField<T>> {
    fields.iter().map(normalize_field).collect()
}

fn normalize_field<T: Record + 'static>(field: &Field<T>) -> NormalizedField<T> {
    let get_value: ValueGetter<T> = match &field.get_value {
        Some(get_value) => Arc::clone(get_value),
        None => {
            let id = field.id.clone();
            Arc::new(move |item: &T| item.value_of(&id))
        }
    };

    let render: Renderer<T> = match &field.render {
        Some(render) => Arc::clone(render),
        None => {
            let get_value = Arc::clone(&get_value);
            Arc::new(move |item: &T| get_value(item).to_string())
        }
    };

    let sort: Comparator<T> = match &field.sort {
        Some(sort) => Arc::clone(sort),
        None => {
            let get_value = Arc::clone(&get_value);
            let field_type = field.field_type;
            Arc::new(move |a: &T, b: &T, direction| {
                compare_values(field_type, &get_value(a), &get_value(b), direction)
            })
        }
    };

    NormalizedField {
        id: field.id.clone(),
        label: field.label.clone().unwrap_or_else(|| field.id.clone()),
        field_type: field.field_type,
        get_value,
        render,
        sort,
        enable_sorting: field.enable_sorting,
        enable_global_search: field.enable_global_search,
        enable_hiding: field.enable_hiding,
        elements: field.elements.clone(),
        filter_by: field.filter_by.clone(),
    }
}

/// Looks a normalized field up by id.
pub fn find_field<'a, T>(
    fields: &'a [NormalizedField<T>],
    id: &str,
) -> Option<&'a NormalizedField<T>> {
    fields.iter().find(|field| field.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn fills_in_missing_accessors_and_label() {
        let fields: Vec<Field<Value>> = vec![Field::new("title")];
        let normalized = normalize_fields(&fields);
        let item = json!({ "title": "Neptune" });

        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].label, "title");
        assert_eq!(normalized[0].value(&item), FieldValue::from("Neptune"));
        assert_eq!(normalized[0].rendered(&item), "Neptune");
    }

    #[test]
    fn keeps_declared_accessors() {
        let fields: Vec<Field<Value>> = vec![Field::new("author")
            .label("Author")
            .get_value(|item: &Value| item["_embedded"]["author"]["name"].as_str().into())];
        let normalized = normalize_fields(&fields);
        let item = json!({ "_embedded": { "author": { "name": "Ada" } } });

        assert_eq!(normalized[0].label, "Author");
        assert_eq!(normalized[0].value(&item), FieldValue::from("Ada"));
        // render follows the declared getter, not item["author"]
        assert_eq!(normalized[0].rendered(&item), "Ada");
    }

    #[test]
    fn custom_render_is_untouched() {
        let fields: Vec<Field<Value>> = vec![Field::new("categories").render(|item: &Value| {
            FieldValue::from(&item["categories"]).to_string().replace(',', ", ")
        })];
        let normalized = normalize_fields(&fields);
        let item = json!({ "categories": ["Space", "NASA"] });
        assert_eq!(normalized[0].rendered(&item), "Space, NASA");
        assert_eq!(
            normalized[0].value(&item),
            FieldValue::from(vec!["Space", "NASA"])
        );
    }

    #[test]
    fn default_sort_uses_field_type() {
        let fields: Vec<Field<Value>> =
            vec![Field::new("satellites").field_type(FieldType::Integer)];
        let normalized = normalize_fields(&fields);
        let (few, many) = (json!({ "satellites": 2 }), json!({ "satellites": 14 }));
        assert_eq!(
            normalized[0].compare(&few, &many, SortDirection::Asc),
            Ordering::Less
        );
        assert_eq!(
            normalized[0].compare(&few, &many, SortDirection::Desc),
            Ordering::Greater
        );
    }

    #[test]
    fn preserves_order_and_length() {
        let fields: Vec<Field<Value>> = vec![Field::new("b"), Field::new("a"), Field::new("b")];
        let ids: Vec<_> = normalize_fields(&fields)
            .into_iter()
            .map(|field| field.id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
        assert!(normalize_fields::<Value>(&[]).is_empty());
    }

    #[test]
    fn deserializes_descriptor_with_defaults() {
        let field: Field<Value> = serde_json::from_value(json!({
            "id": "categories",
            "elements": [{ "value": "Space", "label": "Space" }],
            "filterBy": { "operators": ["isAny", "isAll"], "isPrimary": true }
        }))
        .unwrap();

        assert!(field.enable_sorting);
        assert!(field.enable_hiding);
        assert!(!field.enable_global_search);
        assert!(field.get_value.is_none());
        assert_eq!(field.elements.as_ref().map(Vec::len), Some(1));
        let filter_by = field.filter_by.unwrap();
        assert!(filter_by.is_primary);
        assert_eq!(
            filter_by.operators,
            Some(vec!["isAny".to_string(), "isAll".to_string()])
        );
    }

    #[test]
    fn typed_descriptor_reads_type_key() {
        let raw = json!({ "id": "date", "type": "datetime", "enableGlobalSearch": true });
        let field: Field<Value> = serde_json::from_value(raw).unwrap();
        assert_eq!(field.field_type, Some(FieldType::Datetime));
        assert!(field.enable_global_search);
    }
}
