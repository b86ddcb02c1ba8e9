use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::schema::{SchemaError, choice::ChoiceDef};

/// How the choices are presented and how the field value is encoded.
///
/// Serialized as a plain string. Strings other than `dropdown` and
/// `checkbox` are kept verbatim in [`Format::Unsupported`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Format {
    /// Single selection; the value is one key.
    #[default]
    Dropdown,
    /// Checkbox group; the value is a list of keys, or a flag in simple mode.
    Checkbox,
    /// A format the field does not know how to encode.
    Unsupported(String),
}

impl Format {
    pub fn as_str(&self) -> &str {
        match self {
            Format::Dropdown => "dropdown",
            Format::Checkbox => "checkbox",
            Format::Unsupported(raw) => raw,
        }
    }
}

impl From<String> for Format {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "dropdown" => Format::Dropdown,
            "checkbox" => Format::Checkbox,
            _ => Format::Unsupported(raw),
        }
    }
}

impl From<&str> for Format {
    fn from(raw: &str) -> Self {
        Format::from(raw.to_string())
    }
}

impl From<Format> for String {
    fn from(format: Format) -> Self {
        match format {
            Format::Unsupported(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl JsonSchema for Format {
    fn schema_name() -> Cow<'static, str> {
        "Format".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "description": "Presentation format; `dropdown` and `checkbox` are encoded, anything else has no value.",
            "examples": ["dropdown", "checkbox"]
        })
    }
}

/// Declarative options an option field is initialized from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct FieldOptions {
    #[serde(default)]
    pub choices: Vec<ChoiceDef>,
    #[serde(default)]
    pub format: Format,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

impl FieldOptions {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(SchemaError::Parse)
    }

    pub fn dropdown<I, C>(choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChoiceDef>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn checkbox<I, C>(choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChoiceDef>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            format: Format::Checkbox,
            ..Self::default()
        }
    }
}
