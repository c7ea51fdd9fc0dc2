//! Application: key handling around the wizard controller

use crate::config::WizardConfig;
use crate::state::{Button, FieldKind, Focus, FormDefinition, WizardController};
use crate::{storage, submit};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

pub struct App {
    pub wizard: WizardController,
    quit: bool,
}

impl App {
    /// Build the form and collaborators described by the configuration
    pub fn new(config: &WizardConfig) -> Result<Self> {
        let definition = match &config.form_path {
            Some(path) => FormDefinition::load(path)?,
            None => FormDefinition::contact(),
        };
        let form = definition.build().context("form definition is not usable")?;

        let wizard = WizardController::new(
            form,
            storage::open_default(),
            submit::transport_from_config(config),
        );
        Ok(Self::with_controller(wizard))
    }

    pub fn with_controller(wizard: WizardController) -> Self {
        Self {
            wizard,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Periodic housekeeping between events
    pub fn tick(&mut self) {
        self.wizard.poll_submission();
        self.wizard.tick(Instant::now());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if ctrl || key.modifiers.contains(crate::platform::SAVE_MODIFIER) => {
                self.wizard.save_draft()
            }
            KeyCode::Tab => self.wizard.focus_next(),
            KeyCode::BackTab => self.wizard.focus_prev(),
            KeyCode::PageDown => self.wizard.activate(Button::Next),
            KeyCode::PageUp => self.wizard.activate(Button::Previous),
            KeyCode::Enter => self.handle_enter(),
            _ => match self.wizard.view().focus.clone() {
                Focus::Button(button) if key.code == KeyCode::Char(' ') => {
                    self.wizard.activate(button)
                }
                Focus::Button(_) => {}
                Focus::Field(_) => self.handle_field_key(key),
            },
        }
        Ok(())
    }

    /// Enter acts as Next everywhere except inside a multiline field,
    /// buttons included. Space presses a focused button.
    fn handle_enter(&mut self) {
        let multiline = self
            .wizard
            .focused_field()
            .is_some_and(|f| f.is_multiline());
        // Not intercepted means a newline in a multiline field
        if !self.wizard.handle_enter(multiline) {
            if let Some(field) = self.wizard.focused_field_mut() {
                field.push_char('\n');
            }
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(field) = self.wizard.focused_field_mut() else {
            return;
        };
        let is_checkable = matches!(field.kind, FieldKind::CheckboxGroup | FieldKind::Toggle);

        match key.code {
            KeyCode::Char(' ') if is_checkable => field.toggle(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.push_char(c),
            KeyCode::Backspace => field.pop_char(),
            KeyCode::Right | KeyCode::Down if !field.is_multiline() => field.next_choice(),
            KeyCode::Left | KeyCode::Up if !field.is_multiline() => field.prev_choice(),
            _ => {}
        }
    }
}
