use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{ChoiceDef, FieldOptions};

/// Dotted identifiers (`person.role`, `items.0`) or JSON pointers (`/person/role`).
static FIELD_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:/[^/]*)+|[A-Za-z0-9_\-]+(?:\.[A-Za-z0-9_\-]+)*)$")
        .expect("field path pattern compiles")
});

/// Error code for a key declared by more than one choice.
pub const DUPLICATE_KEY: &str = "duplicate_key";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Checks the declared choices of a field schema.
///
/// Only [`DUPLICATE_KEY`] prevents a field from loading; the other codes
/// are diagnostics for schema authors.
pub fn validate(options: &FieldOptions) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = BTreeSet::new();

    for (index, choice) in options.choices.iter().enumerate() {
        let key = choice.key();
        let path = format!("/choices/{}", index);

        if key.is_empty() {
            errors.push(choice_error(choice, &path, "choice key is empty", "empty_key"));
        } else if !seen.insert(key) {
            errors.push(choice_error(
                choice,
                &path,
                &format!("choice key '{}' is declared more than once", key),
                DUPLICATE_KEY,
            ));
        }

        for (field_path, expected) in choice.conditions().into_iter().flatten() {
            let condition_path = format!("{}/conditions/{}", path, escape_pointer(field_path));
            if !FIELD_PATH.is_match(field_path) {
                errors.push(choice_error(
                    choice,
                    &condition_path,
                    &format!("'{}' is not a valid field path", field_path),
                    "invalid_condition_path",
                ));
            }
            if matches!(expected, Value::Array(_) | Value::Object(_)) {
                errors.push(choice_error(
                    choice,
                    &condition_path,
                    "expected value must be a scalar",
                    "non_scalar_condition",
                ));
            }
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}

fn choice_error(choice: &ChoiceDef, path: &str, message: &str, code: &str) -> ValidationError {
    ValidationError {
        choice_key: Some(choice.key().to_string()),
        path: Some(path.to_string()),
        message: message.into(),
        code: Some(code.into()),
    }
}

fn escape_pointer(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}
