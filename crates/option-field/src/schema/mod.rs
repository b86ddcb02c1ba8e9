pub mod choice;
pub mod field;

use thiserror::Error;

use crate::validate::ValidationError;

pub use choice::{ChoiceDef, Conditions, DetailedChoice};
pub use field::{FieldOptions, Format};

/// Failures raised while turning a declarative schema into an option field.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to parse field options: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("field '{field_id}' has {count} invalid choice definition(s)", count = .errors.len())]
    Invalid {
        field_id: String,
        errors: Vec<ValidationError>,
    },
}
