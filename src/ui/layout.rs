//! Layout components (header, progress, status bar)

use super::components::{ALERT_HEIGHT, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::SAVE_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Screen regions, top to bottom
pub struct WizardLayout {
    pub header: Rect,
    pub alert: Rect,
    pub body: Rect,
    pub buttons: Rect,
    pub status: Rect,
}

/// Split the screen; the alert row collapses when there is no alert
pub fn create_layout(area: Rect, has_alert: bool) -> WizardLayout {
    let alert_height = if has_alert { ALERT_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Progress header
            Constraint::Length(alert_height),  // Alert
            Constraint::Min(0),                // Step content
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    WizardLayout {
        header: chunks[0],
        alert: chunks[1],
        body: chunks[2],
        buttons: chunks[3],
        status: chunks[4],
    }
}

/// Draw the progress gauge with the step counter
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.wizard;
    let view = wizard.view();
    let progress = view.progress.clamp(0.0, 100.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(
                    " Step {} of {} ",
                    view.visible_step,
                    wizard.step_count()
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(progress / 100.0)
        .label(format!("{progress:.0}%"));

    frame.render_widget(gauge, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, sending: bool) {
    let hints = if sending {
        " Sending...".to_string()
    } else {
        format!(
            " Tab:focus  Enter:next  Space:check/press  ←/→:choose  PgUp/PgDn:step  {SAVE_SHORTCUT}:save draft"
        )
    };
    let quit_hint = " Esc:quit ";

    let status = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::Gray),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
