use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::{
    choice::Choice,
    conditions::{FieldHandle, FieldResolver},
    render::view_strategy,
    schema::{FieldOptions, Format, SchemaError},
    validate::{DUPLICATE_KEY, validate},
    value::FieldValue,
    visibility::any_eligible,
};

/// Base field lifecycle supplied by the surrounding form framework.
pub trait FieldBase {
    fn init(&mut self, id: &str, options: &FieldOptions);

    /// Display policy unrelated to choices, such as an explicit hidden flag.
    fn should_display(&self) -> bool;
}

/// Default base field: keeps the id and label and honours `hidden`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseField {
    id: String,
    label: Option<String>,
    hidden: bool,
}

impl BaseField {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

impl FieldBase for BaseField {
    fn init(&mut self, id: &str, options: &FieldOptions) {
        self.id = id.to_string();
        self.label = options.label.clone();
        self.hidden = options.hidden;
    }

    fn should_display(&self) -> bool {
        !self.hidden
    }
}

/// Marks a field that declared no choices and acts as a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckboxFormat {
    Simple,
}

impl CheckboxFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckboxFormat::Simple => "simple",
        }
    }
}

/// A form field offering a fixed list of choices as a dropdown or checkboxes.
///
/// The choice list is built once in [`OptionField::init`]; afterwards only
/// the per-choice `selected` flags change.
#[derive(Debug, Clone)]
pub struct OptionField<B = BaseField> {
    id: String,
    choices: Vec<Choice>,
    format: Format,
    checkbox_format: Option<CheckboxFormat>,
    selected_choice: Option<FieldValue>,
    base: B,
}

impl OptionField<BaseField> {
    pub fn init(id: impl Into<String>, options: FieldOptions) -> Result<Self, SchemaError> {
        Self::init_with_base(id, options, BaseField::default())
    }

    pub fn from_json(id: impl Into<String>, json: &str) -> Result<Self, SchemaError> {
        Self::init(id, FieldOptions::from_json(json)?)
    }
}

impl<B: FieldBase> OptionField<B> {
    /// Normalizes the declared choices and then initializes `base`.
    ///
    /// Only duplicate keys are rejected, since they make the value codec
    /// ambiguous. Other [`validate`] findings are logged and the field
    /// loads; an unresolvable condition path just leaves its choice
    /// ineligible.
    pub fn init_with_base(
        id: impl Into<String>,
        options: FieldOptions,
        mut base: B,
    ) -> Result<Self, SchemaError> {
        let id = id.into();
        let (duplicates, diagnostics): (Vec<_>, Vec<_>) = validate(&options)
            .errors
            .into_iter()
            .partition(|error| error.code.as_deref() == Some(DUPLICATE_KEY));
        if !duplicates.is_empty() {
            warn!(field = %id, duplicates = duplicates.len(), "rejecting option field schema");
            return Err(SchemaError::Invalid {
                field_id: id,
                errors: duplicates,
            });
        }
        for diagnostic in &diagnostics {
            debug!(
                field = %id,
                path = diagnostic.path.as_deref().unwrap_or_default(),
                code = diagnostic.code.as_deref().unwrap_or_default(),
                "{}",
                diagnostic.message
            );
        }

        let mut choices: Vec<Choice> = options.choices.iter().map(Choice::from_def).collect();
        let checkbox_format = if choices.is_empty() {
            choices.push(Choice::synthetic(&id));
            Some(CheckboxFormat::Simple)
        } else {
            None
        };

        base.init(&id, &options);
        debug!(
            field = %id,
            format = options.format.as_str(),
            choices = choices.len(),
            simple = checkbox_format.is_some(),
            "initialized option field"
        );

        Ok(Self {
            id,
            choices,
            format: options.format,
            checkbox_format,
            selected_choice: None,
            base,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice(&self, key: &str) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.key() == key)
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub fn checkbox_format(&self) -> Option<CheckboxFormat> {
        self.checkbox_format
    }

    pub fn is_simple_checkbox(&self) -> bool {
        self.checkbox_format == Some(CheckboxFormat::Simple)
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    /// View resource used to present this field.
    pub fn view_strategy(&self) -> String {
        view_strategy(&self.format)
    }

    /// Choices currently eligible, in declaration order.
    pub fn eligible_choices<'a>(
        &'a self,
        resolver: &'a dyn FieldResolver,
    ) -> impl Iterator<Item = &'a Choice> + 'a {
        self.choices
            .iter()
            .filter(move |choice| choice.conditions_fulfilled(resolver))
    }

    /// Hidden whenever no choice is eligible; otherwise the base field decides.
    pub fn should_display(&self, resolver: &dyn FieldResolver) -> bool {
        if !any_eligible(&self.choices, resolver) {
            trace!(field = %self.id, "no eligible choices, hiding field");
            return false;
        }
        self.base.should_display()
    }

    pub fn get_value(&self) -> Option<FieldValue> {
        match self.format {
            Format::Dropdown => self
                .choices
                .iter()
                .find(|choice| choice.is_selected())
                .map(|choice| FieldValue::Key(choice.key().to_string())),
            Format::Checkbox if self.is_simple_checkbox() => self
                .choices
                .first()
                .map(|choice| FieldValue::Flag(choice.is_selected())),
            Format::Checkbox => Some(FieldValue::Keys(
                self.choices
                    .iter()
                    .filter(|choice| choice.is_selected())
                    .map(|choice| choice.key().to_string())
                    .collect(),
            )),
            Format::Unsupported(_) => None,
        }
    }

    /// Updates the selection flags from an external value.
    ///
    /// A key list on a checkbox field selects exactly those keys. Anything
    /// else is treated as a single key: the matching choice is selected and
    /// every other choice is cleared, so an unknown key clears the field. In
    /// simple-checkbox mode a flag toggles the lone choice.
    pub fn set_value(&mut self, value: &FieldValue) {
        match value {
            FieldValue::Keys(keys) if self.format == Format::Checkbox => {
                for choice in &mut self.choices {
                    if keys.iter().any(|key| key == choice.key()) {
                        choice.set_selected(true);
                    } else if choice.is_selected() {
                        choice.set_selected(false);
                    }
                }
            }
            FieldValue::Flag(flag) if self.is_simple_checkbox() => {
                if let Some(choice) = self.choices.first_mut() {
                    choice.set_selected(*flag);
                }
            }
            FieldValue::Key(key) => self.select_only(Some(key.as_str())),
            FieldValue::Keys(_) | FieldValue::Flag(_) => self.select_only(None),
        }
        trace!(field = %self.id, value = ?value, "applied field value");
    }

    fn select_only(&mut self, key: Option<&str>) {
        for choice in &mut self.choices {
            if key == Some(choice.key()) {
                choice.set_selected(true);
            } else if choice.is_selected() {
                choice.set_selected(false);
            }
        }
    }

    /// Bound value as last assigned through [`OptionField::set_selected_choice`].
    pub fn selected_choice(&self) -> Option<&FieldValue> {
        self.selected_choice.as_ref()
    }

    /// Assigns the bound value and pushes it into the selection flags.
    pub fn set_selected_choice(&mut self, value: FieldValue) {
        self.set_value(&value);
        self.selected_choice = Some(value);
    }

    /// Refreshes the bound value from the selection flags. [`set_value`]
    /// never does this on its own.
    ///
    /// [`set_value`]: OptionField::set_value
    pub fn sync_selected_choice(&mut self) {
        self.selected_choice = self.get_value();
    }
}

impl<B: FieldBase> FieldHandle for OptionField<B> {
    fn get_value(&self) -> Option<Value> {
        OptionField::get_value(self).map(Value::from)
    }
}
