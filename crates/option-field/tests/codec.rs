use serde_json::json;

use option_field::{FieldOptions, FieldValue, Format, OptionField};

fn fixture(name: &str) -> &'static str {
    match name {
        "colour_dropdown" => include_str!("../tests/fixtures/colour_dropdown.json"),
        "department_checkbox" => include_str!("../tests/fixtures/department_checkbox.json"),
        _ => panic!("unknown fixture {}", name),
    }
}

fn selected_count(field: &OptionField) -> usize {
    field
        .choices()
        .iter()
        .filter(|choice| choice.is_selected())
        .count()
}

#[test]
fn bare_string_choices_use_key_as_label() {
    let field = OptionField::from_json("colour", fixture("colour_dropdown")).expect("init");
    assert_eq!(field.format(), &Format::Dropdown);
    for choice in field.choices() {
        assert_eq!(choice.label(), choice.key());
        assert!(!choice.is_selected());
        assert!(choice.conditions().is_none());
    }
}

#[test]
fn detailed_choice_label_falls_back_to_key() {
    let options: FieldOptions = serde_json::from_value(json!({
        "choices": [
            { "key": "a" },
            { "key": "b", "label": "" },
            { "key": "c", "label": "Charlie" }
        ]
    }))
    .expect("deserialize");
    let field = OptionField::init("f", options).expect("init");
    let labels: Vec<_> = field.choices().iter().map(|choice| choice.label()).collect();
    assert_eq!(labels, vec!["a", "b", "Charlie"]);
}

#[test]
fn options_default_to_empty_dropdown() {
    let options = FieldOptions::from_json("{}").expect("parse");
    assert_eq!(options.format, Format::Dropdown);
    assert!(options.choices.is_empty());
}

#[test]
fn empty_choices_create_simple_checkbox() {
    let field = OptionField::init("agree", FieldOptions::default()).expect("init");
    assert!(field.is_simple_checkbox());
    assert_eq!(field.choices().len(), 1);
    let synthetic = &field.choices()[0];
    assert_eq!(synthetic.key(), "agree");
    assert_eq!(synthetic.label(), "");
    assert!(!synthetic.is_selected());
}

#[test]
fn declared_choices_never_enable_simple_mode() {
    let field = OptionField::init("f", FieldOptions::checkbox(["a"])).expect("init");
    assert!(!field.is_simple_checkbox());
    assert_eq!(field.checkbox_format(), None);
}

#[test]
fn dropdown_end_to_end() {
    let mut field = OptionField::from_json("colour", fixture("colour_dropdown")).expect("init");
    assert_eq!(field.get_value(), None);

    field.set_value(&"green".into());
    assert_eq!(field.get_value(), Some(FieldValue::Key("green".into())));

    field.set_value(&"blue".into());
    assert_eq!(field.get_value(), None);
    assert_eq!(selected_count(&field), 0);
}

#[test]
fn dropdown_keeps_single_selection() {
    let mut field = OptionField::init("f", FieldOptions::dropdown(["a", "b", "c"])).expect("init");
    for key in ["a", "c", "b", "b", "zzz", "a"] {
        field.set_value(&key.into());
        assert!(selected_count(&field) <= 1);
    }
    assert_eq!(field.get_value(), Some(FieldValue::Key("a".into())));
}

#[test]
fn dropdown_ignores_key_lists() {
    let mut field = OptionField::init("f", FieldOptions::dropdown(["a", "b"])).expect("init");
    field.set_value(&"a".into());
    field.set_value(&vec!["a", "b"].into());
    assert_eq!(field.get_value(), None);
}

#[test]
fn multi_checkbox_preserves_declaration_order() {
    let mut field = OptionField::init("f", FieldOptions::checkbox(["a", "b", "c"])).expect("init");
    assert_eq!(field.get_value(), Some(FieldValue::Keys(vec![])));

    field.set_value(&vec!["c", "a"].into());
    assert_eq!(
        field.get_value(),
        Some(FieldValue::Keys(vec!["a".into(), "c".into()]))
    );

    field.set_value(&vec!["b"].into());
    assert_eq!(field.get_value(), Some(FieldValue::Keys(vec!["b".into()])));
}

#[test]
fn checkbox_scalar_value_selects_single_key() {
    let mut field = OptionField::init("f", FieldOptions::checkbox(["a", "b"])).expect("init");
    field.set_value(&vec!["a", "b"].into());
    field.set_value(&"b".into());
    assert_eq!(field.get_value(), Some(FieldValue::Keys(vec!["b".into()])));
}

#[test]
fn simple_checkbox_toggles_with_flag_or_key() {
    let options = FieldOptions {
        format: Format::Checkbox,
        ..FieldOptions::default()
    };
    let mut field = OptionField::init("agree", options).expect("init");
    assert_eq!(field.get_value(), Some(FieldValue::Flag(false)));

    field.set_value(&true.into());
    assert_eq!(field.get_value(), Some(FieldValue::Flag(true)));

    field.set_value(&false.into());
    assert_eq!(field.get_value(), Some(FieldValue::Flag(false)));

    field.set_value(&"agree".into());
    assert_eq!(field.get_value(), Some(FieldValue::Flag(true)));

    field.set_value(&"something-else".into());
    assert_eq!(field.get_value(), Some(FieldValue::Flag(false)));
}

#[test]
fn unsupported_format_has_no_value() {
    let mut field = OptionField::from_json("f", r#"{"choices": ["a"], "format": "radio"}"#)
        .expect("init");
    assert_eq!(field.format(), &Format::Unsupported("radio".into()));
    field.set_value(&"a".into());
    assert!(field.choices()[0].is_selected());
    assert_eq!(field.get_value(), None);
}

#[test]
fn unsupported_format_round_trips_verbatim() {
    let options = FieldOptions::from_json(r#"{"choices": ["a"], "format": "radio"}"#)
        .expect("parse");
    assert_eq!(options.format.as_str(), "radio");
    let reserialized = serde_json::to_value(&options).expect("serialize");
    assert_eq!(reserialized["format"], "radio");
}

#[test]
fn empty_key_choice_still_loads() {
    let mut field =
        OptionField::from_json("f", r#"{"choices": ["", "a"]}"#).expect("init");
    assert_eq!(field.choices().len(), 2);
    assert_eq!(field.choices()[0].key(), "");
    field.set_value(&"".into());
    assert_eq!(field.get_value(), Some(FieldValue::Key(String::new())));
}

#[test]
fn selected_choice_assignment_updates_flags() {
    let mut field = OptionField::from_json("colour", fixture("colour_dropdown")).expect("init");
    field.set_selected_choice("red".into());
    assert_eq!(field.selected_choice(), Some(&FieldValue::Key("red".into())));
    assert_eq!(field.get_value(), Some(FieldValue::Key("red".into())));
}

#[test]
fn set_value_does_not_refresh_selected_choice() {
    let mut field = OptionField::from_json("colour", fixture("colour_dropdown")).expect("init");
    field.set_selected_choice("red".into());
    field.set_value(&"green".into());
    assert_eq!(field.selected_choice(), Some(&FieldValue::Key("red".into())));

    field.sync_selected_choice();
    assert_eq!(
        field.selected_choice(),
        Some(&FieldValue::Key("green".into()))
    );
}

#[test]
fn field_value_from_json() {
    assert_eq!(
        FieldValue::from_json(&json!("a")),
        Some(FieldValue::Key("a".into()))
    );
    assert_eq!(
        FieldValue::from_json(&json!(true)),
        Some(FieldValue::Flag(true))
    );
    assert_eq!(
        FieldValue::from_json(&json!(["a", "b"])),
        Some(FieldValue::Keys(vec!["a".into(), "b".into()]))
    );
    assert_eq!(FieldValue::from_json(&json!(42)), None);
}
