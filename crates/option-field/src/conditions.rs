use serde_json::Value;
use tracing::trace;

use crate::schema::Conditions;

/// A live field in the host form whose current value can be read.
pub trait FieldHandle {
    /// Current externally visible value, or `None` when the field has none.
    fn get_value(&self) -> Option<Value>;
}

/// Locates other fields of the same form by path.
pub trait FieldResolver {
    fn resolve_ref(&self, path: &str) -> Option<&dyn FieldHandle>;
}

impl FieldHandle for Value {
    fn get_value(&self) -> Option<Value> {
        Some(self.clone())
    }
}

/// Evaluates a choice's conditions against the current state of the form.
///
/// Conditions are checked in declaration order and evaluation stops at the
/// first one that does not hold. Missing or empty conditions always pass.
/// Nothing is cached: every call reads the referenced fields again.
pub fn conditions_fulfilled(conditions: Option<&Conditions>, resolver: &dyn FieldResolver) -> bool {
    let Some(conditions) = conditions else {
        return true;
    };
    conditions
        .iter()
        .all(|(path, expected)| condition_holds(path, expected, resolver))
}

/// Checks a single `path -> expected` pair.
///
/// A list value passes when it contains `expected`; any other value must be
/// strictly equal to it. An unresolved path never passes.
pub fn condition_holds(path: &str, expected: &Value, resolver: &dyn FieldResolver) -> bool {
    let observed = resolver
        .resolve_ref(path)
        .and_then(|field| field.get_value());
    let holds = match &observed {
        Some(Value::Array(items)) => items.contains(expected),
        Some(value) => value == expected,
        None => false,
    };
    trace!(path, %expected, resolved = observed.is_some(), holds, "evaluated choice condition");
    holds
}
