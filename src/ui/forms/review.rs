//! Review summary rendering

use crate::state::ReviewRow;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_review(frame: &mut Frame, area: Rect, rows: &[ReviewRow]) {
    let label_width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);

    let lines: Vec<Line> = if rows.is_empty() {
        vec![Line::from(Span::styled(
            "Nothing filled in yet.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        rows.iter()
            .map(|row| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<width$}  ", row.label, width = label_width),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        row.value.replace('\n', " "),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .title(" Review your answers ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
