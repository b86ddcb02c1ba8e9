use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::{
    conditions::FieldResolver,
    field::{CheckboxFormat, FieldBase, OptionField},
    schema::Format,
    value::FieldValue,
};

/// View resource presenting a field of the given format.
pub fn view_strategy(format: &Format) -> String {
    format!("resources/elements/optionfield-{}.html", format.as_str())
}

/// Describes a single choice for render outputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceView {
    pub key: String,
    pub label: String,
    pub selected: bool,
    pub eligible: bool,
    pub conditional: bool,
}

/// Snapshot of a field as the presentation layer needs it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub id: String,
    pub format: Format,
    pub checkbox_format: Option<CheckboxFormat>,
    pub view: String,
    pub visible: bool,
    pub value: Option<FieldValue>,
    pub choices: Vec<ChoiceView>,
}

/// Evaluates eligibility and visibility once against the current form state.
pub fn build_view<B: FieldBase>(field: &OptionField<B>, resolver: &dyn FieldResolver) -> FieldView {
    let choices = field
        .choices()
        .iter()
        .map(|choice| ChoiceView {
            key: choice.key().to_string(),
            label: choice.label().to_string(),
            selected: choice.is_selected(),
            eligible: choice.conditions_fulfilled(resolver),
            conditional: choice.is_conditional(),
        })
        .collect();

    FieldView {
        id: field.id().to_string(),
        format: field.format().clone(),
        checkbox_format: field.checkbox_format(),
        view: field.view_strategy(),
        visible: field.should_display(resolver),
        value: field.get_value(),
        choices,
    }
}

/// Render the view as a structured JSON-friendly value.
pub fn render_json_ui(view: &FieldView) -> Value {
    let choices = view
        .choices
        .iter()
        .map(|choice| {
            let mut map = Map::new();
            map.insert("key".into(), Value::String(choice.key.clone()));
            map.insert("label".into(), Value::String(choice.label.clone()));
            map.insert("selected".into(), Value::Bool(choice.selected));
            map.insert("eligible".into(), Value::Bool(choice.eligible));
            if choice.conditional {
                map.insert("conditional".into(), Value::Bool(true));
            }
            Value::Object(map)
        })
        .collect::<Vec<_>>();

    json!({
        "id": view.id,
        "format": view.format.as_str(),
        "checkbox_format": view.checkbox_format.map(|format| format.as_str()),
        "view": view.view,
        "visible": view.visible,
        "value": view.value.clone().map(Value::from).unwrap_or(Value::Null),
        "choices": choices,
    })
}

/// Render the view as human-friendly text.
pub fn render_text(view: &FieldView) -> String {
    let mut lines = Vec::new();
    let mut header = format!("Field: {} ({})", view.id, view.format.as_str());
    if let Some(checkbox_format) = view.checkbox_format {
        header.push_str(&format!(" [{}]", checkbox_format.as_str()));
    }
    lines.push(header);
    lines.push(format!(
        "Visible: {}",
        if view.visible { "yes" } else { "no" }
    ));
    lines.push(format!(
        "Value: {}",
        view.value
            .as_ref()
            .map(value_to_display)
            .unwrap_or_else(|| "<none>".to_string())
    ));

    lines.push("Choices:".to_string());
    for choice in &view.choices {
        let marker = if choice.selected { "[x]" } else { "[ ]" };
        let mut entry = format!(" {} {}", marker, choice.key);
        if !choice.label.is_empty() && choice.label != choice.key {
            entry.push_str(&format!(" ({})", choice.label));
        }
        if !choice.eligible {
            entry.push_str(" [unavailable]");
        }
        lines.push(entry);
    }

    lines.join("\n")
}

fn value_to_display(value: &FieldValue) -> String {
    match value {
        FieldValue::Key(key) => key.clone(),
        FieldValue::Flag(flag) => flag.to_string(),
        FieldValue::Keys(keys) if keys.is_empty() => "[]".to_string(),
        FieldValue::Keys(keys) => keys.join(", "),
    }
}
