//! Declarative form structure loaded from JSON

use super::field::{FieldKind, FormField};
use super::form_state::{Step, WizardForm};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the hidden anti-spam field
pub const HONEYPOT_FIELD: &str = "_gotcha";

#[derive(Debug, Error)]
pub enum FormError {
    #[error("form has no steps")]
    NoSteps,
    #[error("duplicate field name `{0}`")]
    DuplicateField(String),
    #[error("field `{0}` needs at least one option")]
    MissingOptions(String),
    #[error("failed to read form definition {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid form definition: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefinition {
    pub steps: Vec<StepDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDefinition {
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    /// Falls back to `name`
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl FieldDefinition {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: Some(label.to_string()),
            kind,
            required: false,
            options: Vec::new(),
            value: None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    fn value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    fn build(&self) -> FormField {
        let default_value = match (&self.value, self.kind) {
            (Some(v), _) => v.clone(),
            (None, FieldKind::Toggle) => "on".to_string(),
            (None, _) => String::new(),
        };
        FormField::new(
            &self.name,
            self.label.as_deref().unwrap_or(&self.name),
            self.kind,
            self.required,
            self.options.clone(),
            default_value,
        )
    }
}

impl FormDefinition {
    /// Load a definition from a JSON file
    pub fn load(path: &Path) -> Result<Self, FormError> {
        let content = fs::read_to_string(path).map_err(|source| FormError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The built-in project request form
    pub fn contact() -> Self {
        Self {
            steps: vec![
                StepDefinition {
                    title: "About you".to_string(),
                    fields: vec![
                        FieldDefinition::new("name", "Name", FieldKind::Text).required(),
                        FieldDefinition::new("email", "Email", FieldKind::Email).required(),
                        FieldDefinition::new("phone", "Phone", FieldKind::Text),
                        FieldDefinition::new("company", "Company", FieldKind::Text),
                    ],
                },
                StepDefinition {
                    title: "Project".to_string(),
                    fields: vec![
                        FieldDefinition::new("service", "Service", FieldKind::Select)
                            .required()
                            .options(&["Website", "Web app", "Mobile app", "Consulting"]),
                        FieldDefinition::new("features", "Features", FieldKind::CheckboxGroup)
                            .options(&["Blog", "Online store", "Booking", "Members area"]),
                        FieldDefinition::new("budget", "Budget", FieldKind::Select).options(&[
                            "Up to 1k",
                            "1k to 5k",
                            "5k to 15k",
                            "Above 15k",
                        ]),
                        FieldDefinition::new("deadline", "Deadline", FieldKind::Text),
                    ],
                },
                StepDefinition {
                    title: "Details".to_string(),
                    fields: vec![
                        FieldDefinition::new("details", "Details", FieldKind::Multiline)
                            .required(),
                        FieldDefinition::new("newsletter", "Send me updates", FieldKind::Toggle)
                            .value("yes"),
                        FieldDefinition::new("consent", "I agree to be contacted", FieldKind::Toggle)
                            .required()
                            .value("yes"),
                        FieldDefinition::new("_subject", "_subject", FieldKind::Hidden)
                            .value("New project request"),
                        FieldDefinition::new(HONEYPOT_FIELD, HONEYPOT_FIELD, FieldKind::Hidden),
                    ],
                },
                StepDefinition {
                    title: "Review".to_string(),
                    fields: Vec::new(),
                },
            ],
        }
    }

    /// Resolve the definition into a live form
    pub fn build(&self) -> Result<WizardForm, FormError> {
        if self.steps.is_empty() {
            return Err(FormError::NoSteps);
        }

        let mut seen = HashSet::new();
        for field in self.steps.iter().flat_map(|s| &s.fields) {
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
            let needs_options = matches!(field.kind, FieldKind::Select | FieldKind::CheckboxGroup);
            if needs_options && field.options.is_empty() {
                return Err(FormError::MissingOptions(field.name.clone()));
            }
        }

        let mut steps: Vec<Step> = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| Step {
                position: i + 1,
                title: step.title.clone(),
                fields: step.fields.iter().map(FieldDefinition::build).collect(),
            })
            .collect();

        if !seen.contains(HONEYPOT_FIELD) {
            steps[0].fields.push(
                FieldDefinition::new(HONEYPOT_FIELD, HONEYPOT_FIELD, FieldKind::Hidden).build(),
            );
        }

        Ok(WizardForm::new(steps))
    }
}
