//! Catalog rows.

use crate::{Error, Result, RowId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One catalog record.
///
/// Only `id` is interpreted; every other field is carried through untouched
/// so the front end can render whatever columns the catalog returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Row {
    /// Creates a row with no display fields.
    #[must_use]
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Adds a display field, replacing any previous value under `name`.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Builds a row from an arbitrary JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Returns the raw JSON value of a display field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Renders a display field as text.
    ///
    /// Null and missing fields yield `None`; strings are returned verbatim and
    /// other values use their JSON representation.
    pub fn field_text(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            other => Some(other.to_string()),
        }
    }
}
