use std::collections::BTreeMap;

use crate::{choice::Choice, conditions::FieldResolver, field::FieldBase, field::OptionField};

pub type VisibilityMap = BTreeMap<String, bool>;

/// True when at least one choice is eligible right now.
pub fn any_eligible(choices: &[Choice], resolver: &dyn FieldResolver) -> bool {
    choices
        .iter()
        .any(|choice| choice.conditions_fulfilled(resolver))
}

/// Display state of every field, keyed by field id.
pub fn resolve_visibility<'a, B, I>(fields: I, resolver: &dyn FieldResolver) -> VisibilityMap
where
    B: FieldBase + 'a,
    I: IntoIterator<Item = &'a OptionField<B>>,
{
    fields
        .into_iter()
        .map(|field| (field.id().to_string(), field.should_display(resolver)))
        .collect()
}
