//! Exam result payload and the section model derived from it. The API does
//! not publish a schema for `result`, so it is kept as raw JSON and only
//! reshaped for display.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExamDetailsRequest {
    /// `null` when nothing is stored.
    pub token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExamResult(pub Value);

impl ExamResult {
    pub fn from_body(body: &Value) -> Self {
        Self(body.get("result").cloned().unwrap_or(Value::Null))
    }

    /// Scalar top-level fields (student name, total, grade, ...).
    pub fn summary(&self) -> Vec<(String, String)> {
        match &self.0 {
            Value::Object(map) => map
                .iter()
                .filter(|(_, value)| !is_container(value))
                .map(|(key, value)| (humanize(key), display_value(value)))
                .collect(),
            Value::Null | Value::Array(_) => Vec::new(),
            scalar => vec![("Result".to_string(), display_value(scalar))],
        }
    }

    /// Togglable sections: nested objects/arrays of an object payload, or the
    /// elements of an array payload.
    pub fn sections(&self) -> Vec<ResultSection> {
        match &self.0 {
            Value::Object(map) => map
                .iter()
                .filter(|(_, value)| is_container(value))
                .map(|(key, value)| ResultSection {
                    id: SectionId::new(key),
                    title: humanize(key),
                    table: SectionTable::from_value(value),
                })
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let label = section_label(item).unwrap_or_else(|| format!("Section {}", index + 1));
                    ResultSection {
                        id: SectionId::new(&label),
                        title: label,
                        table: SectionTable::from_value(item),
                    }
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Identifier a section is tagged with. Several sections may share one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(String);

impl SectionId {
    /// Normalizes to a lowercase, dash-separated slug.
    pub fn new(raw: &str) -> Self {
        let slug = raw
            .trim()
            .chars()
            .map(|ch| if ch.is_alphanumeric() { ch.to_ascii_lowercase() } else { '-' })
            .collect::<String>();
        let slug = slug
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultSection {
    pub id: SectionId,
    pub title: String,
    pub table: SectionTable,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SectionTable {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                columns: vec!["Field".to_string(), "Value".to_string()],
                rows: map
                    .iter()
                    .map(|(key, value)| vec![humanize(key), display_value(value)])
                    .collect(),
            },
            Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
                let mut keys: Vec<&str> = Vec::new();
                for item in items.iter().filter_map(Value::as_object) {
                    for key in item.keys() {
                        if !keys.contains(&key.as_str()) {
                            keys.push(key);
                        }
                    }
                }
                Self {
                    columns: keys.iter().map(|key| humanize(key)).collect(),
                    rows: items
                        .iter()
                        .map(|item| {
                            keys.iter()
                                .map(|key| item.get(*key).map_or_else(|| "-".to_string(), display_value))
                                .collect()
                        })
                        .collect(),
                }
            }
            Value::Array(items) => Self {
                columns: vec!["Value".to_string()],
                rows: items.iter().map(|item| vec![display_value(item)]).collect(),
            },
            scalar => Self {
                columns: vec!["Value".to_string()],
                rows: vec![vec![display_value(scalar)]],
            },
        }
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn section_label(item: &Value) -> Option<String> {
    ["subject", "subject_name", "name", "title", "section"]
        .iter()
        .find_map(|key| item.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        nested => nested.to_string(),
    }
}

/// `total_marks` -> `Total marks`.
fn humanize(key: &str) -> String {
    let spaced = key.replace(['_', '-'], " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => key.to_string(),
    }
}
