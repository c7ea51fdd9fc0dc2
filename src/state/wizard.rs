//! Wizard controller
//!
//! Owns the form, the current step and the derived view state. Storage
//! and delivery are injected so the controller can run against
//! in-memory fakes in tests.

use super::alert::{Alert, Severity, DRAFT_ALERT_DURATION};
use super::draft::Draft;
use super::forms::{FormData, FormField, WizardForm};
use super::review::{self, ReviewRow};
use super::validation::{self, ValidationError};
use crate::storage::{DraftStore, StorageError, DRAFT_KEY};
use crate::submit::{SubmissionTransport, SubmitError};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

pub const MSG_REQUIRED: &str = "Please fill in the required fields before continuing.";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_DRAFT_SAVED: &str = "Draft saved on this device.";
pub const MSG_DRAFT_FAILED: &str = "Could not save the draft on this device.";
pub const MSG_SENT: &str = "Sent successfully! We will be in touch soon.";
pub const MSG_SEND_FAILED: &str = "Could not send right now. Please try again in a moment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Previous,
    SaveDraft,
    Next,
    Submit,
}

impl Button {
    pub fn label(&self) -> &'static str {
        match self {
            Button::Previous => "Previous",
            Button::SaveDraft => "Save draft",
            Button::Next => "Next",
            Button::Submit => "Submit",
        }
    }
}

/// What currently has input focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    Field(String),
    Button(Button),
}

/// Everything the renderer needs besides the form itself
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub visible_step: usize,
    /// Percentage in 0..=100
    pub progress: f64,
    pub previous_disabled: bool,
    pub next_hidden: bool,
    pub submit_hidden: bool,
    pub alert: Option<Alert>,
    pub review: Vec<ReviewRow>,
    pub focus: Focus,
    /// A background submission has not answered yet
    pub sending: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            visible_step: 1,
            progress: 0.0,
            previous_disabled: true,
            next_hidden: false,
            submit_hidden: true,
            alert: None,
            review: Vec::new(),
            focus: Focus::Button(Button::Next),
            sending: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

pub struct WizardController {
    form: WizardForm,
    current: usize,
    view: ViewState,
    store: Box<dyn DraftStore>,
    transport: Arc<dyn SubmissionTransport>,
    results_tx: mpsc::UnboundedSender<Result<(), SubmitError>>,
    results_rx: mpsc::UnboundedReceiver<Result<(), SubmitError>>,
    in_flight: usize,
}

impl WizardController {
    /// Build the controller, restore any saved draft and show the first step
    pub fn new(
        form: WizardForm,
        store: Box<dyn DraftStore>,
        transport: Box<dyn SubmissionTransport>,
    ) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        let mut controller = Self {
            form,
            current: 1,
            view: ViewState::default(),
            store,
            transport: Arc::from(transport),
            results_tx,
            results_rx,
            in_flight: 0,
        };
        controller.load_draft();
        controller.show_step(1);
        controller
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.form.step_count()
    }

    pub fn is_last_step(&self) -> bool {
        self.current == self.step_count()
    }

    pub fn form(&self) -> &WizardForm {
        &self.form
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn DraftStore {
        self.store.as_ref()
    }

    /// Display step `n`. Callers clamp `n` to `1..=step_count()`.
    pub fn show_step(&mut self, n: usize) {
        let total = self.step_count();
        self.current = n;
        self.view.visible_step = n;
        self.view.progress = 100.0 * n as f64 / total as f64;
        self.view.previous_disabled = n == 1;
        self.view.next_hidden = n == total;
        self.view.submit_hidden = n != total;
        self.hide_alert();

        if n == total {
            self.build_review();
        }

        self.view.focus = self.initial_focus(n);
        tracing::debug!(step = n, total, "Showing step");
    }

    fn initial_focus(&self, n: usize) -> Focus {
        if let Some(field) = self.form.step(n).and_then(|s| s.first_focusable()) {
            return Focus::Field(field.name.clone());
        }
        let buttons = self.available_buttons();
        Focus::Button(buttons.last().copied().unwrap_or(Button::SaveDraft))
    }

    /// Check the required fields of step `n`, focusing the first failure
    pub fn validate_step(&mut self, n: usize) -> bool {
        let result = match self.form.step(n) {
            Some(step) => validation::validate(step),
            None => Ok(()),
        };

        match result {
            Ok(()) => {
                self.hide_alert();
                true
            }
            Err(err) => {
                tracing::debug!(step = n, "Validation failed: {err}");
                self.view.focus = Focus::Field(err.field().to_string());
                match err {
                    ValidationError::MissingRequired(_) => {
                        self.show_alert(MSG_REQUIRED, Severity::Warning)
                    }
                    ValidationError::InvalidEmail(_) => {
                        self.show_alert(MSG_INVALID_EMAIL, Severity::Error)
                    }
                }
                false
            }
        }
    }

    pub fn show_alert(&mut self, message: &str, severity: Severity) {
        self.view.alert = Some(Alert::new(message, severity));
    }

    pub fn hide_alert(&mut self) {
        self.view.alert = None;
    }

    /// Clear an alert whose display time has run out
    pub fn tick(&mut self, now: Instant) {
        if self.view.alert.as_ref().is_some_and(|a| a.is_expired(now)) {
            self.view.alert = None;
        }
    }

    pub fn build_review(&mut self) {
        self.view.review = review::build(&self.form);
    }

    pub fn save_draft(&mut self) {
        let result = Draft::capture(&self.form)
            .to_json()
            .map_err(StorageError::from)
            .and_then(|json| self.store.set_item(DRAFT_KEY, &json));

        match result {
            Ok(()) => {
                tracing::info!("Draft saved");
                let expires_at = Instant::now() + DRAFT_ALERT_DURATION;
                self.view.alert =
                    Some(Alert::new(MSG_DRAFT_SAVED, Severity::Warning).expiring(expires_at));
            }
            Err(e) => {
                tracing::error!("Failed to save draft: {e}");
                self.show_alert(MSG_DRAFT_FAILED, Severity::Error);
            }
        }
    }

    /// Restore the saved draft; a missing or unreadable draft is ignored
    pub fn load_draft(&mut self) {
        let raw = match self.store.get_item(DRAFT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("Could not read saved draft: {e}");
                return;
            }
        };

        match Draft::from_json(&raw) {
            Ok(draft) if draft.is_empty() => tracing::debug!("Saved draft is empty"),
            Ok(draft) => {
                let restored = draft.apply(&mut self.form);
                tracing::info!(fields = restored, "Restored saved draft");
            }
            Err(e) => tracing::warn!("Ignoring unreadable draft: {e}"),
        }
    }

    pub fn previous(&mut self) {
        self.show_step(self.current.saturating_sub(1).max(1));
    }

    /// Advance when the current step validates. Returns whether it moved on.
    pub fn next(&mut self) -> bool {
        if !self.validate_step(self.current) {
            return false;
        }
        self.show_step((self.current + 1).min(self.step_count()));
        true
    }

    /// Enter on any control but a multiline field acts as Next.
    /// Returns true when the key was intercepted.
    pub fn handle_enter(&mut self, target_is_multiline: bool) -> bool {
        if target_is_multiline {
            return false;
        }
        if !self.is_last_step() {
            self.next();
        }
        true
    }

    fn prepare_submission(&self) -> Option<FormData> {
        if !self.form.honeypot().is_empty() {
            tracing::info!("Anti-spam field filled in, dropping submission");
            return None;
        }
        let data = self.form.data();
        tracing::debug!(entries = data.len(), "Collected answers for submission");
        Some(data)
    }

    /// Deliver the form once, no retries, on a background task. The wizard keeps
    /// handling events; `poll_submission` applies the answer.
    /// Returns false when the submission was dropped.
    pub fn start_submit(&mut self) -> bool {
        let Some(data) = self.prepare_submission() else {
            return false;
        };
        let transport = Arc::clone(&self.transport);
        let tx = self.results_tx.clone();
        self.in_flight += 1;
        self.view.sending = true;

        tokio::spawn(async move {
            let _ = tx.send(transport.submit(&data).await);
        });
        true
    }

    /// Apply the answer of a finished background submission, if any
    pub fn poll_submission(&mut self) -> Option<SubmitOutcome> {
        let result = self.results_rx.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        self.view.sending = self.in_flight > 0;
        Some(self.finish_submission(result))
    }

    fn finish_submission(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                if let Err(e) = self.store.remove_item(DRAFT_KEY) {
                    tracing::warn!("Sent, but could not delete the draft: {e}");
                }
                self.form.reset();
                self.show_step(1);
                self.show_alert(MSG_SENT, Severity::Warning);
                tracing::info!("Form submitted");
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::error!("Submission failed: {e}");
                self.show_alert(MSG_SEND_FAILED, Severity::Error);
                SubmitOutcome::Failed
            }
        }
    }

    /// Buttons that can currently be focused and activated
    pub fn available_buttons(&self) -> Vec<Button> {
        let mut buttons = Vec::with_capacity(3);
        if !self.view.previous_disabled {
            buttons.push(Button::Previous);
        }
        buttons.push(Button::SaveDraft);
        if !self.view.next_hidden {
            buttons.push(Button::Next);
        }
        if !self.view.submit_hidden {
            buttons.push(Button::Submit);
        }
        buttons
    }

    pub fn activate(&mut self, button: Button) {
        if !self.available_buttons().contains(&button) {
            return;
        }
        match button {
            Button::Previous => self.previous(),
            Button::SaveDraft => self.save_draft(),
            Button::Next => {
                self.next();
            }
            Button::Submit => {
                self.start_submit();
            }
        }
    }

    fn focus_order(&self) -> Vec<Focus> {
        let fields = self
            .form
            .step(self.current)
            .map(|s| s.fields.as_slice())
            .unwrap_or_default()
            .iter()
            .filter(|f| f.is_focusable())
            .map(|f| Focus::Field(f.name.clone()));
        let buttons = self.available_buttons().into_iter().map(Focus::Button);
        fields.chain(buttons).collect()
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.view.focus);
        let next = pos.map(|p| (p + 1) % order.len()).unwrap_or(0);
        if let Some(focus) = order.get(next) {
            self.view.focus = focus.clone();
        }
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let pos = order.iter().position(|f| *f == self.view.focus);
        let prev = match pos {
            Some(0) | None => order.len().saturating_sub(1),
            Some(p) => p - 1,
        };
        if let Some(focus) = order.get(prev) {
            self.view.focus = focus.clone();
        }
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        match &self.view.focus {
            Focus::Field(name) => self.form.field(name),
            Focus::Button(_) => None,
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        match &self.view.focus {
            Focus::Field(name) => self.form.field_mut(name),
            Focus::Button(_) => None,
        }
    }
}
