use serde_json::Value;

use crate::conditions::{FieldHandle, FieldResolver};

/// Resolver backed by a JSON document of field values.
///
/// Paths are either dotted (`person.role`) or JSON pointers (`/person/role`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    root: Value,
}

impl FormValues {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn lookup(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return None;
        }
        self.root.pointer(&to_pointer(path))
    }
}

impl From<Value> for FormValues {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

impl FieldResolver for FormValues {
    fn resolve_ref(&self, path: &str) -> Option<&dyn FieldHandle> {
        self.lookup(path).map(|value| value as &dyn FieldHandle)
    }
}

/// Converts a dotted field path into a JSON pointer. Pointers pass through.
pub fn to_pointer(path: &str) -> String {
    if path.starts_with('/') {
        return path.to_string();
    }
    let mut pointer = String::with_capacity(path.len() + 1);
    for segment in path.split('.') {
        pointer.push('/');
        pointer.push_str(&segment.replace('~', "~0").replace('/', "~1"));
    }
    pointer
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dotted_paths_become_pointers() {
        assert_eq!(to_pointer("role"), "/role");
        assert_eq!(to_pointer("person.address.city"), "/person/address/city");
        assert_eq!(to_pointer("/already/pointer"), "/already/pointer");
    }

    #[test]
    fn lookup_walks_nested_objects_and_arrays() {
        let values = FormValues::new(json!({
            "person": { "role": "admin", "tags": ["a", "b"] }
        }));
        assert_eq!(values.lookup("person.role"), Some(&json!("admin")));
        assert_eq!(values.lookup("person.tags.1"), Some(&json!("b")));
        assert_eq!(values.lookup("/person/role"), Some(&json!("admin")));
        assert_eq!(values.lookup("person.missing"), None);
        assert_eq!(values.lookup(""), None);
    }
}
