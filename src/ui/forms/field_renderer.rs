//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const MULTILINE_HEIGHT: u16 = 6;

/// Rows a field occupies including its border
pub fn field_height(field: &FormField) -> u16 {
    match field.kind {
        FieldKind::Multiline => MULTILINE_HEIGHT,
        FieldKind::CheckboxGroup => field.options.len() as u16 + 2,
        FieldKind::Hidden => 0,
        _ => 3,
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor_style = Style::default().fg(Color::Cyan);
    let cursor = if is_active { "▌" } else { "" };

    let content = match (&field.value, field.kind) {
        (FieldValue::Group(checked), _) => {
            let lines: Vec<Line> = field
                .options
                .iter()
                .enumerate()
                .map(|(idx, option)| {
                    let mark = if checked.contains(option) { "[x]" } else { "[ ]" };
                    let highlighted = is_active && idx == field.option_cursor;
                    let option_style = if highlighted {
                        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        style
                    };
                    Line::from(Span::styled(format!("{mark} {option}"), option_style))
                })
                .collect();
            Paragraph::new(lines)
        }
        (_, FieldKind::Select) => {
            let value = field.display_value();
            let display = if is_active {
                format!("◀ {value} ▶")
            } else {
                value
            };
            Paragraph::new(Line::from(Span::styled(display, style)))
        }
        (_, FieldKind::Toggle) => {
            Paragraph::new(Line::from(Span::styled(field.display_value(), style)))
        }
        (_, FieldKind::Multiline) => {
            let mut lines: Vec<Line> = field
                .as_text()
                .split('\n')
                .map(|l| Line::from(l.to_string()))
                .collect();
            if is_active {
                if let Some(last) = lines.last_mut() {
                    last.spans.push(Span::styled(cursor, cursor_style));
                }
            }
            // Keep the cursor line in view
            let visible = MULTILINE_HEIGHT.saturating_sub(2) as usize;
            let skip = lines.len().saturating_sub(visible);
            Paragraph::new(lines.split_off(skip))
        }
        _ => {
            let value = field.as_text();
            let display = if value.is_empty() && !is_active {
                "(empty)"
            } else {
                value
            };
            Paragraph::new(Line::from(vec![
                Span::styled(display, style),
                Span::styled(cursor, cursor_style),
            ]))
        }
    };

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
