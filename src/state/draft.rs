//! Serialized snapshot of in-progress answers

use super::forms::{FieldKind, FieldValue, WizardForm};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A saved value. Anything that is neither a string nor a list of
/// strings lands in `Other` and is coerced when applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftValue {
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

impl DraftValue {
    /// Truthiness used for toggles: empty strings, `false`, `0` and `null` are off
    pub fn is_truthy(&self) -> bool {
        match self {
            DraftValue::Text(s) => !s.is_empty(),
            DraftValue::List(_) => true,
            DraftValue::Other(value) => match value {
                serde_json::Value::Null => false,
                serde_json::Value::Bool(b) => *b,
                serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
                serde_json::Value::String(s) => !s.is_empty(),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
            },
        }
    }

    /// Content written into a single-value field
    pub fn to_text(&self) -> String {
        match self {
            DraftValue::Text(s) => s.clone(),
            DraftValue::List(items) => items.join(","),
            DraftValue::Other(serde_json::Value::Null) => String::new(),
            DraftValue::Other(serde_json::Value::String(s)) => s.clone(),
            DraftValue::Other(value) => value.to_string(),
        }
    }

    fn matches(&self, option: &str) -> bool {
        match self {
            DraftValue::List(items) => items.iter().any(|i| i == option),
            scalar => scalar.to_text() == option,
        }
    }
}

/// Flat mapping of field name to saved value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft(BTreeMap<String, DraftValue>);

impl Draft {
    /// Snapshot every named field of the form
    pub fn capture(form: &WizardForm) -> Self {
        let mut values = BTreeMap::new();
        for field in form.fields() {
            match &field.value {
                FieldValue::Single(s) => {
                    values.insert(field.name.clone(), DraftValue::Text(s.clone()));
                }
                FieldValue::Group(checked) => {
                    values.insert(field.name.clone(), DraftValue::List(checked.clone()));
                }
                FieldValue::Toggle(true) => {
                    values.insert(
                        field.name.clone(),
                        DraftValue::Text(field.default_value.clone()),
                    );
                }
                FieldValue::Toggle(false) => {}
            }
        }
        Self(values)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Write saved values into matching fields; unknown keys are ignored.
    /// Returns how many fields were restored.
    pub fn apply(&self, form: &mut WizardForm) -> usize {
        let mut restored = 0;
        for (name, value) in &self.0 {
            let Some(field) = form.field_mut(name) else {
                tracing::debug!("Ignoring draft value for unknown field {name}");
                continue;
            };
            match field.kind {
                FieldKind::CheckboxGroup => {
                    let checked: Vec<String> = field
                        .options
                        .iter()
                        .filter(|option| value.matches(option))
                        .cloned()
                        .collect();
                    field.set_checked_values(&checked);
                }
                FieldKind::Toggle => field.set_toggle(value.is_truthy()),
                FieldKind::Select => {
                    let text = value.to_text();
                    let known = field.options.contains(&text);
                    field.set_text(if known { text } else { String::new() });
                }
                _ => field.set_text(value.to_text()),
            }
            restored += 1;
        }
        restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FormDefinition;
    use pretty_assertions::assert_eq;

    fn contact() -> WizardForm {
        FormDefinition::contact().build().unwrap()
    }

    #[test]
    fn test_round_trip_restores_every_value() {
        let mut form = contact();
        form.field_mut("name").unwrap().set_text("Ana".into());
        form.field_mut("email").unwrap().set_text("ana@example.com".into());
        form.field_mut("service").unwrap().set_text("Web app".into());
        form.field_mut("features")
            .unwrap()
            .set_checked_values(&["Blog".into(), "Booking".into()]);
        form.field_mut("details").unwrap().set_text("line one\nline two".into());
        form.field_mut("consent").unwrap().set_toggle(true);

        let json = Draft::capture(&form).to_json().unwrap();

        let mut fresh = contact();
        Draft::from_json(&json).unwrap().apply(&mut fresh);

        assert_eq!(fresh.data(), form.data());
        assert_eq!(
            fresh.field("features").unwrap().value,
            FieldValue::Group(vec!["Blog".into(), "Booking".into()])
        );
        assert_eq!(fresh.field("newsletter").unwrap().value, FieldValue::Toggle(false));
        assert_eq!(fresh.field("consent").unwrap().value, FieldValue::Toggle(true));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let draft = Draft::from_json(r#"{"name": "Ana", "legacy": "x"}"#).unwrap();
        let mut form = contact();
        assert_eq!(draft.apply(&mut form), 1);
        assert_eq!(form.field("name").unwrap().as_text(), "Ana");
    }

    #[test]
    fn test_group_accepts_scalar_value() {
        let draft = Draft::from_json(r#"{"features": "Blog"}"#).unwrap();
        let mut form = contact();
        draft.apply(&mut form);
        assert_eq!(
            form.field("features").unwrap().value,
            FieldValue::Group(vec!["Blog".into()])
        );
    }

    #[test]
    fn test_toggle_truthiness() {
        for (raw, expected) in [
            (r#"{"consent": "yes"}"#, true),
            (r#"{"consent": ""}"#, false),
            (r#"{"consent": true}"#, true),
            (r#"{"consent": 0}"#, false),
            (r#"{"consent": null}"#, false),
            (r#"{"consent": []}"#, true),
        ] {
            let mut form = contact();
            Draft::from_json(raw).unwrap().apply(&mut form);
            assert_eq!(
                form.field("consent").unwrap().value,
                FieldValue::Toggle(expected),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_non_string_values_are_coerced_to_text() {
        let draft = Draft::from_json(r#"{"phone": 12345, "company": ["a", "b"]}"#).unwrap();
        let mut form = contact();
        draft.apply(&mut form);
        assert_eq!(form.field("phone").unwrap().as_text(), "12345");
        assert_eq!(form.field("company").unwrap().as_text(), "a,b");
    }

    #[test]
    fn test_unknown_select_option_leaves_it_unselected() {
        let draft = Draft::from_json(r#"{"service": "Carpentry"}"#).unwrap();
        let mut form = contact();
        draft.apply(&mut form);
        assert!(form.field("service").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_object_json() {
        assert!(Draft::from_json("[1, 2]").is_err());
        assert!(Draft::from_json("{oops").is_err());
    }
}
