//! Form field value objects

use serde::{Deserialize, Serialize};

/// How a field is edited, validated and submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Multiline,
    /// Single choice among `options`; empty means unselected
    Select,
    /// Several checkboxes sharing one name
    CheckboxGroup,
    /// One checkbox submitting its `value` when checked
    Toggle,
    Hidden,
}

/// Type-safe field values, resolved once when the form is built
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Single(String),
    /// Checked option values, kept in option order
    Group(Vec<String>),
    Toggle(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Single(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub options: Vec<String>,
    /// Value submitted by a checked toggle, or the initial value of other fields
    pub default_value: String,
    pub value: FieldValue,
    /// Highlighted option within a checkbox group
    pub option_cursor: usize,
}

impl FormField {
    pub fn new(
        name: &str,
        label: &str,
        kind: FieldKind,
        required: bool,
        options: Vec<String>,
        default_value: String,
    ) -> Self {
        let mut field = Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
            options,
            default_value,
            value: FieldValue::default(),
            option_cursor: 0,
        };
        field.reset();
        field
    }

    /// Create a new single-line text field
    #[cfg(test)]
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text, false, Vec::new(), String::new())
    }

    /// Mark the field as required
    #[cfg(test)]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    /// Hidden fields never take focus
    pub fn is_focusable(&self) -> bool {
        self.kind != FieldKind::Hidden
    }

    /// True when the field would fail a required check
    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Single(s) => s.is_empty(),
            FieldValue::Group(checked) => checked.is_empty(),
            FieldValue::Toggle(on) => !on,
        }
    }

    /// Get the text value (empty for groups and toggles)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Single(s) => s,
            FieldValue::Group(_) | FieldValue::Toggle(_) => "",
        }
    }

    /// Set the text content of a single-value field
    pub fn set_text(&mut self, value: String) {
        if let FieldValue::Single(s) = &mut self.value {
            *s = value;
        }
    }

    /// Check exactly the options contained in `values`
    pub fn set_checked_values(&mut self, values: &[String]) {
        if let FieldValue::Group(checked) = &mut self.value {
            *checked = self
                .options
                .iter()
                .filter(|option| values.contains(option))
                .cloned()
                .collect();
        }
    }

    pub fn set_toggle(&mut self, on: bool) {
        if let FieldValue::Toggle(state) = &mut self.value {
            *state = on;
        }
    }

    /// Name/value pairs this field contributes to a submission, in order
    pub fn entries(&self) -> Vec<(String, String)> {
        match &self.value {
            FieldValue::Single(s) => vec![(self.name.clone(), s.clone())],
            FieldValue::Group(checked) => checked
                .iter()
                .map(|v| (self.name.clone(), v.clone()))
                .collect(),
            FieldValue::Toggle(true) => vec![(self.name.clone(), self.default_value.clone())],
            FieldValue::Toggle(false) => Vec::new(),
        }
    }

    /// Restore the value the field was built with
    pub fn reset(&mut self) {
        self.option_cursor = 0;
        self.value = match self.kind {
            FieldKind::CheckboxGroup => FieldValue::Group(Vec::new()),
            FieldKind::Toggle => FieldValue::Toggle(false),
            FieldKind::Hidden => FieldValue::Single(self.default_value.clone()),
            _ => FieldValue::Single(String::new()),
        };
    }

    /// Push a character to a free-text field
    pub fn push_char(&mut self, c: char) {
        if !self.accepts_text() {
            return;
        }
        if let FieldValue::Single(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from a free-text field
    pub fn pop_char(&mut self) {
        if !self.accepts_text() {
            return;
        }
        if let FieldValue::Single(s) = &mut self.value {
            s.pop();
        }
    }

    fn accepts_text(&self) -> bool {
        matches!(
            self.kind,
            FieldKind::Text | FieldKind::Email | FieldKind::Multiline
        )
    }

    /// Move a select to the next choice, or the group cursor to the next option
    pub fn next_choice(&mut self) {
        match self.kind {
            FieldKind::Select => self.step_select(1),
            FieldKind::CheckboxGroup if !self.options.is_empty() => {
                self.option_cursor = (self.option_cursor + 1) % self.options.len();
            }
            _ => {}
        }
    }

    /// Move a select to the previous choice, or the group cursor back
    pub fn prev_choice(&mut self) {
        match self.kind {
            FieldKind::Select => self.step_select(-1),
            FieldKind::CheckboxGroup if !self.options.is_empty() => {
                if self.option_cursor == 0 {
                    self.option_cursor = self.options.len() - 1;
                } else {
                    self.option_cursor -= 1;
                }
            }
            _ => {}
        }
    }

    // Position 0 is the unselected placeholder, options follow
    fn step_select(&mut self, delta: isize) {
        let slots = self.options.len() as isize + 1;
        let current = self
            .options
            .iter()
            .position(|o| o == self.as_text())
            .map(|i| i as isize + 1)
            .unwrap_or(0);
        let next = (current + delta).rem_euclid(slots) as usize;
        let value = if next == 0 {
            String::new()
        } else {
            self.options[next - 1].clone()
        };
        self.set_text(value);
    }

    /// Flip the highlighted checkbox option, or the toggle itself
    pub fn toggle(&mut self) {
        match &mut self.value {
            FieldValue::Toggle(on) => *on = !*on,
            FieldValue::Group(checked) => {
                let Some(option) = self.options.get(self.option_cursor) else {
                    return;
                };
                if let Some(pos) = checked.iter().position(|v| v == option) {
                    checked.remove(pos);
                } else {
                    checked.push(option.clone());
                    let options = &self.options;
                    checked.sort_by_key(|v| options.iter().position(|o| o == v));
                }
            }
            FieldValue::Single(_) => {}
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Single(s) if self.kind == FieldKind::Select && s.is_empty() => {
                "Select...".to_string()
            }
            FieldValue::Single(s) => s.clone(),
            FieldValue::Group(checked) => checked.join(", "),
            FieldValue::Toggle(on) => if *on { "[x]" } else { "[ ]" }.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn group() -> FormField {
        FormField::new(
            "features",
            "Features",
            FieldKind::CheckboxGroup,
            false,
            vec!["blog".into(), "shop".into(), "chat".into()],
            String::new(),
        )
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = FormField::text("name", "Name");
        field.push_char('A');
        field.push_char('n');
        field.push_char('a');
        field.pop_char();
        assert_eq!(field.as_text(), "An");
        assert!(!field.is_empty());
    }

    #[test]
    fn test_select_cycles_through_placeholder() {
        let mut field = FormField::new(
            "service",
            "Service",
            FieldKind::Select,
            true,
            vec!["site".into(), "app".into()],
            String::new(),
        );
        assert!(field.is_empty());
        field.next_choice();
        assert_eq!(field.as_text(), "site");
        field.next_choice();
        field.next_choice();
        assert_eq!(field.as_text(), "");
        field.prev_choice();
        assert_eq!(field.as_text(), "app");
    }

    #[test]
    fn test_select_ignores_typing() {
        let mut field = FormField::new(
            "service",
            "Service",
            FieldKind::Select,
            false,
            vec!["site".into()],
            String::new(),
        );
        field.push_char('x');
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_group_keeps_option_order() {
        let mut field = group();
        field.option_cursor = 2;
        field.toggle();
        field.option_cursor = 0;
        field.toggle();
        assert_eq!(field.value, FieldValue::Group(vec!["blog".into(), "chat".into()]));

        field.toggle();
        assert_eq!(field.value, FieldValue::Group(vec!["chat".into()]));
    }

    #[test]
    fn test_group_entries_one_per_checked_value() {
        let mut field = group();
        field.set_checked_values(&["shop".into(), "blog".into(), "unknown".into()]);
        assert_eq!(
            field.entries(),
            vec![
                ("features".to_string(), "blog".to_string()),
                ("features".to_string(), "shop".to_string()),
            ]
        );
    }

    #[test]
    fn test_toggle_entries_only_when_checked() {
        let mut field = FormField::new(
            "consent",
            "I agree",
            FieldKind::Toggle,
            true,
            Vec::new(),
            "yes".into(),
        );
        assert!(field.entries().is_empty());
        assert!(field.is_empty());
        field.toggle();
        assert_eq!(field.entries(), vec![("consent".to_string(), "yes".to_string())]);
    }

    #[test]
    fn test_reset_restores_hidden_default() {
        let mut hidden = FormField::new(
            "_subject",
            "_subject",
            FieldKind::Hidden,
            false,
            Vec::new(),
            "New request".into(),
        );
        hidden.set_text("changed".into());
        hidden.reset();
        assert_eq!(hidden.as_text(), "New request");
        assert!(!hidden.is_focusable());
    }

    #[test]
    fn test_display_value() {
        let mut field = group();
        field.set_checked_values(&["blog".into(), "chat".into()]);
        assert_eq!(field.display_value(), "blog, chat");
    }
}
