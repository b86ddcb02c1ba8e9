use serde_json::Value;

use crate::{
    conditions::{FieldHandle, FieldResolver},
    field::OptionField,
    resolve::FormValues,
    value::FieldValue,
    visibility::{VisibilityMap, resolve_visibility},
};

/// Option fields of one form plus the plain values of every other field.
///
/// Paths naming an option field id resolve to that field's live value; all
/// other paths fall back to the values document.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<OptionField>,
    values: FormValues,
}

impl Form {
    pub fn new(values: FormValues) -> Self {
        Self {
            fields: Vec::new(),
            values,
        }
    }

    /// Adds a field, replacing and returning any field with the same id.
    pub fn insert(&mut self, field: OptionField) -> Option<OptionField> {
        match self.fields.iter_mut().find(|existing| existing.id() == field.id()) {
            Some(existing) => Some(std::mem::replace(existing, field)),
            None => {
                self.fields.push(field);
                None
            }
        }
    }

    pub fn fields(&self) -> &[OptionField] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&OptionField> {
        self.fields.iter().find(|field| field.id() == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut OptionField> {
        self.fields.iter_mut().find(|field| field.id() == id)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn set_values(&mut self, values: FormValues) {
        self.values = values;
    }

    /// Routes a value to the named field through its binding. Returns
    /// `false` when no such field exists.
    pub fn set_value(&mut self, id: &str, value: FieldValue) -> bool {
        match self.field_mut(id) {
            Some(field) => {
                field.set_selected_choice(value);
                true
            }
            None => false,
        }
    }

    pub fn value(&self, id: &str) -> Option<Value> {
        self.resolve_ref(id).and_then(|field| field.get_value())
    }

    pub fn visibility(&self) -> VisibilityMap {
        resolve_visibility(&self.fields, self)
    }
}

impl FieldResolver for Form {
    fn resolve_ref(&self, path: &str) -> Option<&dyn FieldHandle> {
        match self.field(path) {
            Some(field) => Some(field as &dyn FieldHandle),
            None => self.values.resolve_ref(path),
        }
    }
}
