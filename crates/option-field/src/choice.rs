use serde::Serialize;

use crate::{
    conditions::{FieldResolver, conditions_fulfilled},
    schema::{ChoiceDef, Conditions},
};

/// A normalized, selectable option of an option field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    key: String,
    label: String,
    selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    conditions: Option<Conditions>,
}

impl Choice {
    pub fn from_def(def: &ChoiceDef) -> Self {
        match def {
            ChoiceDef::Key(key) => Self {
                key: key.clone(),
                label: key.clone(),
                selected: false,
                conditions: None,
            },
            ChoiceDef::Detailed(choice) => Self {
                key: choice.key.clone(),
                label: choice
                    .label
                    .clone()
                    .filter(|label| !label.is_empty())
                    .unwrap_or_else(|| choice.key.clone()),
                selected: false,
                conditions: choice.conditions.clone(),
            },
        }
    }

    /// The unlabeled toggle used when a field declares no choices.
    pub(crate) fn synthetic(key: &str) -> Self {
        Self {
            key: key.to_string(),
            label: String::new(),
            selected: false,
            conditions: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn conditions(&self) -> Option<&Conditions> {
        self.conditions.as_ref()
    }

    pub fn is_conditional(&self) -> bool {
        self.conditions
            .as_ref()
            .is_some_and(|conditions| !conditions.is_empty())
    }

    /// Whether the choice is currently eligible given the rest of the form.
    pub fn conditions_fulfilled(&self, resolver: &dyn FieldResolver) -> bool {
        conditions_fulfilled(self.conditions.as_ref(), resolver)
    }
}
