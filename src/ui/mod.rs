//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.wizard.view();
    let areas = layout::create_layout(frame.area(), view.alert.is_some());

    layout::draw_header(frame, areas.header, app);

    if let Some(alert) = &view.alert {
        components::render_alert(frame, areas.alert, alert);
    }

    forms::draw_step(frame, areas.body, app);
    components::render_button_row(frame, areas.buttons, view);
    layout::draw_status_bar(frame, areas.status, view.sending);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormDefinition, WizardController};
    use crate::storage::MemoryStore;
    use crate::submit::MockSubmissionTransport;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::with_controller(WizardController::new(
            FormDefinition::contact().build().unwrap(),
            Box::new(MemoryStore::default()),
            Box::new(MockSubmissionTransport::new()),
        ))
    }

    #[test]
    fn test_first_step_renders_fields_and_buttons() {
        let screen = render(&app());
        assert!(screen.contains("Step 1 of 4"));
        assert!(screen.contains("About you"));
        assert!(screen.contains("Name *"));
        assert!(screen.contains("Next"));
        assert!(!screen.contains("Submit"));
        assert!(!screen.contains("_gotcha"));
    }

    #[test]
    fn test_review_step_renders_summary() {
        let mut app = app();
        app.wizard.show_step(4);
        let screen = render(&app);
        assert!(screen.contains("Review your answers"));
        assert!(screen.contains("Submit"));
        assert!(screen.contains("100%"));
    }

    #[test]
    fn test_only_visible_step_fields_render() {
        let labels = [
            (1, vec!["Name *", "Email *"]),
            (2, vec!["Service *", "Features"]),
            (3, vec!["Details *", "Send me updates"]),
        ];
        let mut app = app();
        for n in 1..=4 {
            app.wizard.show_step(n);
            let screen = render(&app);
            for (step, step_labels) in &labels {
                for label in step_labels {
                    assert_eq!(
                        screen.contains(&format!(" {label} ")),
                        *step == n,
                        "{label:?} on step {n}"
                    );
                }
            }
            assert_eq!(screen.contains("Review your answers"), n == 4);
        }
    }

    #[test]
    fn test_hints_show_enter_and_space() {
        let screen = render(&app());
        assert!(screen.contains("Enter:next"));
        assert!(screen.contains("Space:check/press"));
    }

    #[test]
    fn test_alert_is_rendered() {
        let mut app = app();
        app.wizard.next();
        let screen = render(&app);
        assert!(screen.contains("Please fill in the required fields"));
    }
}
