//! Read-only recap shown on the final step

use super::forms::WizardForm;

/// Technical fields never shown to the user
const IGNORED_FIELDS: &[&str] = &["_gotcha", "_subject"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub label: String,
    pub value: String,
}

/// One row per non-empty entry, in field order
pub fn build(form: &WizardForm) -> Vec<ReviewRow> {
    form.fields()
        .filter(|field| !IGNORED_FIELDS.contains(&field.name.as_str()))
        .flat_map(|field| {
            field
                .entries()
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(move |(_, value)| ReviewRow {
                    label: field.label.clone(),
                    value,
                })
        })
        .collect()
}
