//! Live form state: ordered steps holding typed fields

use super::field::FormField;
use super::definition::HONEYPOT_FIELD;

/// One section of the form, identified by its 1-based position
#[derive(Debug, Clone)]
pub struct Step {
    pub position: usize,
    pub title: String,
    pub fields: Vec<FormField>,
}

impl Step {
    pub fn required_fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|f| f.required)
    }

    /// First field that can take focus
    pub fn first_focusable(&self) -> Option<&FormField> {
        self.fields.iter().find(|f| f.is_focusable())
    }
}

/// Encoded field set in form order, as sent to the endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData(Vec<(String, String)>);

impl FormData {
    pub fn entries(&self) -> &[(String, String)] {
        &self.0
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<(String, String)>> for FormData {
    fn from(entries: Vec<(String, String)>) -> Self {
        Self(entries)
    }
}

/// The whole form. Steps never change after construction.
#[derive(Debug, Clone)]
pub struct WizardForm {
    steps: Vec<Step>,
}

impl WizardForm {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, position: usize) -> Option<&Step> {
        position.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.steps.iter().flat_map(|s| &s.fields)
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.steps
            .iter_mut()
            .flat_map(|s| s.fields.iter_mut())
            .find(|f| f.name == name)
    }

    /// Every entry in field order; checkbox groups contribute one per checked value
    pub fn data(&self) -> FormData {
        FormData(self.fields().flat_map(FormField::entries).collect())
    }

    /// Current value of the anti-spam field
    pub fn honeypot(&self) -> &str {
        self.field(HONEYPOT_FIELD)
            .map(FormField::as_text)
            .unwrap_or_default()
    }

    pub fn reset(&mut self) {
        for field in self.steps.iter_mut().flat_map(|s| s.fields.iter_mut()) {
            field.reset();
        }
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
    fn test_step_lookup_is_one_based() {
        let form = contact();
        assert!(form.step(0).is_none());
        assert_eq!(form.step(1).unwrap().position, 1);
        assert_eq!(form.step(4).unwrap().title, "Review");
        assert!(form.step(5).is_none());
    }

    #[test]
    fn test_data_follows_field_order() {
        let mut form = contact();
        form.field_mut("name").unwrap().set_text("Ana".into());
        form.field_mut("features")
            .unwrap()
            .set_checked_values(&["Booking".into(), "Blog".into()]);

        let data = form.data();
        let names: Vec<&str> = data.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "name", "email", "phone", "company", "service", "features", "features",
                "budget", "deadline", "details", "_subject", "_gotcha",
            ]
        );
        assert_eq!(data.get("name"), Some("Ana"));
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut form = contact();
        form.field_mut("name").unwrap().set_text("Ana".into());
        form.field_mut("consent").unwrap().set_toggle(true);
        form.reset();
        assert!(form.field("name").unwrap().is_empty());
        assert!(form.field("consent").unwrap().is_empty());
        assert_eq!(form.field("_subject").unwrap().as_text(), "New project request");
    }

    #[test]
    fn test_first_focusable_skips_hidden() {
        let form = contact();
        assert_eq!(form.step(1).unwrap().first_focusable().unwrap().name, "name");
        assert!(form.step(4).unwrap().first_focusable().is_none());
    }

    #[test]
    fn test_required_fields() {
        let form = contact();
        let required: Vec<&str> = form
            .step(3)
            .unwrap()
            .required_fields()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(required, vec!["details", "consent"]);
    }
}
