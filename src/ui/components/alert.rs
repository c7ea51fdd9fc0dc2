//! Alert box component

use crate::state::{Alert, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Alert height in rows (borders + one line of text)
pub const ALERT_HEIGHT: u16 = 3;

fn colors(severity: Severity) -> (Color, &'static str) {
    match severity {
        Severity::Warning => (Color::Yellow, " Notice "),
        Severity::Error => (Color::Red, " Error "),
    }
}

pub fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let (color, title) = colors(alert.severity);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(alert.message.as_str())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}
