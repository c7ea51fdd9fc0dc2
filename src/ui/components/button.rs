//! Button component for TUI

use crate::state::{Button, Focus, ViewState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

const BUTTON_WIDTH: u16 = 16;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Buttons shown for the current view; a disabled Previous stays visible
fn visible_buttons(view: &ViewState) -> Vec<(Button, bool)> {
    let mut buttons = vec![
        (Button::Previous, !view.previous_disabled),
        (Button::SaveDraft, true),
    ];
    if !view.next_hidden {
        buttons.push((Button::Next, true));
    }
    if !view.submit_hidden {
        buttons.push((Button::Submit, true));
    }
    buttons
}

/// Render the navigation row: Previous, Save draft, then Next or Submit
pub fn render_button_row(frame: &mut Frame, area: Rect, view: &ViewState) {
    let buttons = visible_buttons(view);

    let mut constraints: Vec<Constraint> = buttons
        .iter()
        .map(|_| Constraint::Length(BUTTON_WIDTH))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, (button, enabled)) in buttons.iter().enumerate() {
        let is_selected = view.focus == Focus::Button(*button);
        render_button(frame, chunks[idx], button.label(), is_selected, *enabled);
    }
}
