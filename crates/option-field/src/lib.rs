#![allow(missing_docs)]

pub mod choice;
pub mod conditions;
pub mod field;
pub mod form;
pub mod render;
pub mod resolve;
pub mod schema;
pub mod validate;
pub mod value;
pub mod visibility;

pub use choice::Choice;
pub use conditions::{FieldHandle, FieldResolver, condition_holds, conditions_fulfilled};
pub use field::{BaseField, CheckboxFormat, FieldBase, OptionField};
pub use form::Form;
pub use render::{ChoiceView, FieldView, build_view, render_json_ui, render_text, view_strategy};
pub use resolve::FormValues;
pub use schema::{ChoiceDef, Conditions, DetailedChoice, FieldOptions, Format, SchemaError};
pub use validate::{DUPLICATE_KEY, ValidationError, ValidationResult, validate};
pub use value::FieldValue;
pub use visibility::{VisibilityMap, any_eligible, resolve_visibility};
