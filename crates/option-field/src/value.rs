use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// External value of an option field.
///
/// Dropdowns expose a single [`FieldValue::Key`], checkbox groups a
/// [`FieldValue::Keys`] list in declaration order, and a simple checkbox a
/// [`FieldValue::Flag`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Key(String),
    Keys(Vec<String>),
}

impl FieldValue {
    /// Interprets a JSON value as a field value. Numbers, objects and nested
    /// arrays have no field-value meaning and yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        FieldValue::deserialize(value).ok()
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            FieldValue::Key(key) => Some(key),
            _ => None,
        }
    }

    pub fn as_keys(&self) -> Option<&[String]> {
        match self {
            FieldValue::Keys(keys) => Some(keys),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Flag(flag) => Value::Bool(flag),
            FieldValue::Key(key) => Value::String(key),
            FieldValue::Keys(keys) => Value::Array(keys.into_iter().map(Value::String).collect()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(key: &str) -> Self {
        FieldValue::Key(key.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(key: String) -> Self {
        FieldValue::Key(key)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(keys: Vec<String>) -> Self {
        FieldValue::Keys(keys)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(keys: Vec<&str>) -> Self {
        FieldValue::Keys(keys.into_iter().map(str::to_string).collect())
    }
}
