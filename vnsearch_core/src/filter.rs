//! Filtering collections of records by one or more text fields

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyDict;
use serde_json::{Map, Value};

use crate::search::matches;

/// Read access to a record's string fields by name.
///
/// Missing fields and values that are not strings both come back as `None`.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl FieldSource for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).and_then(Value::as_str).map(Cow::Borrowed)
    }
}

impl FieldSource for Value {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_object().and_then(|obj| obj.field(name))
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

/// The field names to check on each record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector<'f>(Vec<&'f str>);

impl<'f> FieldSelector<'f> {
    pub fn names(&self) -> &[&'f str] {
        &self.0
    }
}

impl<'f> From<&'f str> for FieldSelector<'f> {
    fn from(name: &'f str) -> Self {
        FieldSelector(vec![name])
    }
}

impl<'f> From<&'f String> for FieldSelector<'f> {
    fn from(name: &'f String) -> Self {
        FieldSelector(vec![name.as_str()])
    }
}

impl<'f> From<&'f [&'f str]> for FieldSelector<'f> {
    fn from(names: &'f [&'f str]) -> Self {
        FieldSelector(names.to_vec())
    }
}

impl<'f, const N: usize> From<&'f [&'f str; N]> for FieldSelector<'f> {
    fn from(names: &'f [&'f str; N]) -> Self {
        FieldSelector(names.to_vec())
    }
}

impl<'f> From<&'f [String]> for FieldSelector<'f> {
    fn from(names: &'f [String]) -> Self {
        FieldSelector(names.iter().map(String::as_str).collect())
    }
}

impl<'f> From<&'f Vec<String>> for FieldSelector<'f> {
    fn from(names: &'f Vec<String>) -> Self {
        names.as_slice().into()
    }
}

/// Keep the items where at least one selected field matches `search_term`.
///
/// An absent or empty term keeps everything. Empty or missing fields never
/// match. Relative order is preserved.
pub fn filter_items<'a, 'f, T, S>(items: &'a [T], search_term: Option<&str>, fields: S) -> Vec<&'a T>
where
    T: FieldSource,
    S: Into<FieldSelector<'f>>,
{
    let term = match search_term {
        Some(term) if !term.is_empty() => term,
        _ => return items.iter().collect(),
    };
    let fields = fields.into();

    let kept: Vec<&T> = items
        .iter()
        .filter(|item| item_matches(*item, term, &fields))
        .collect();

    tracing::debug!(kept = kept.len(), total = items.len(), fields = ?fields.names(), "filtered items");
    kept
}

fn item_matches<T: FieldSource>(item: &T, term: &str, fields: &FieldSelector<'_>) -> bool {
    fields.names().iter().any(|name| match item.field(name) {
        Some(value) if !value.is_empty() => matches(&value, term),
        _ => false,
    })
}

// ============= Python Bindings =============

/// A single field name or a list of them
#[cfg(feature = "python")]
#[derive(FromPyObject)]
pub enum FieldNames {
    #[pyo3(transparent)]
    One(String),
    #[pyo3(transparent)]
    Many(Vec<String>),
}

#[cfg(feature = "python")]
impl FieldNames {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            FieldNames::One(name) => vec![name],
            FieldNames::Many(names) => names,
        }
    }
}

#[cfg(feature = "python")]
struct PyRecord<'py>(Bound<'py, PyDict>);

#[cfg(feature = "python")]
impl FieldSource for PyRecord<'_> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.0
            .get_item(name)
            .ok()
            .flatten()
            .and_then(|value| value.extract::<String>().ok())
            .map(Cow::Owned)
    }
}

#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "filter_items", signature = (items, search_term, fields))]
pub fn py_filter_items<'py>(
    items: Vec<Bound<'py, PyDict>>,
    search_term: Option<&str>,
    fields: FieldNames,
) -> Vec<Bound<'py, PyDict>> {
    let records: Vec<PyRecord<'py>> = items.into_iter().map(PyRecord).collect();
    let names = fields.into_vec();
    filter_items(&records, search_term, &names)
        .into_iter()
        .map(|record| record.0.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn people() -> Vec<BTreeMap<String, String>> {
        [("Nguyễn Văn An", "Hà Nội"), ("Trần Thị Bình", "Huế"), ("Lê Nguyên", "")]
            .iter()
            .map(|(name, city)| {
                BTreeMap::from([
                    ("name".to_string(), name.to_string()),
                    ("city".to_string(), city.to_string()),
                ])
            })
            .collect()
    }

    #[test]
    fn filters_on_single_field() {
        let items = vec![json!({"name": "Nguyễn Văn An"}), json!({"name": "Trần Thị Bình"})];
        let kept = filter_items(&items, Some("nguyen"), "name");
        assert_eq!(kept, vec![&items[0]]);
    }

    #[test]
    fn empty_or_absent_term_keeps_everything() {
        let items = people();
        assert_eq!(filter_items(&items, Some(""), "name").len(), 3);
        assert_eq!(filter_items(&items, None, "name").len(), 3);
    }

    #[test]
    fn any_selected_field_may_match() {
        let items = people();
        let kept = filter_items(&items, Some("hue"), &["name", "city"]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0]["name"], "Trần Thị Bình");
    }

    #[test]
    fn preserves_order() {
        let items = people();
        let kept = filter_items(&items, Some("nguyen"), "name");
        let names: Vec<&str> = kept.iter().map(|p| p["name"].as_str()).collect();
        assert_eq!(names, vec!["Nguyễn Văn An", "Lê Nguyên"]);
    }

    #[test]
    fn missing_or_empty_fields_are_skipped() {
        let items = people();
        assert!(filter_items(&items, Some("an"), "nickname").is_empty());

        // whitespace-only term passes the emptiness check but still skips empty fields
        let kept = filter_items(&items, Some("  "), "city");
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn non_string_json_values_never_match() {
        let items = vec![json!({"name": 42}), json!({"name": null}), json!("Nguyễn")];
        assert!(filter_items(&items, Some("4"), "name").is_empty());
        assert!(filter_items(&items, Some("nguyen"), "name").is_empty());
    }

    #[test]
    fn accepts_owned_field_lists() {
        let items = people();
        let fields = vec!["city".to_string()];
        assert_eq!(filter_items(&items, Some("hn"), &fields).len(), 1);
    }
}
