//! Visible step rendering

use super::field_renderer::{draw_field, field_height};
use super::review::draw_review;
use crate::app::App;
use crate::state::{Focus, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Index of the first field to draw so that the focused one fits in `height`
pub fn scroll_offset(heights: &[u16], focused: Option<usize>, height: u16) -> usize {
    let Some(focused) = focused else {
        return 0;
    };
    let mut start = 0;
    while start < focused {
        let used: u16 = heights[start..=focused].iter().sum();
        if used <= height {
            break;
        }
        start += 1;
    }
    start
}

/// Draw the fields of the visible step, plus the review on the final step
pub fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.wizard;
    let view = wizard.view();
    let Some(step) = wizard.form().step(view.visible_step) else {
        return;
    };

    let fields: Vec<&FormField> = step.fields.iter().filter(|f| f.is_focusable()).collect();
    let show_review = !view.submit_hidden;

    let block = Block::default()
        .title(format!(" {}. {} ", step.position, step.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (fields_area, review_area) = match (fields.is_empty(), show_review) {
        (true, true) => (None, Some(inner)),
        (false, true) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(inner);
            (Some(chunks[0]), Some(chunks[1]))
        }
        _ => (Some(inner), None),
    };

    if let Some(area) = fields_area {
        draw_fields(frame, area, &fields, &view.focus);
    }
    if let Some(area) = review_area {
        draw_review(frame, area, &view.review);
    }
}

fn draw_fields(frame: &mut Frame, area: Rect, fields: &[&FormField], focus: &Focus) {
    let heights: Vec<u16> = fields.iter().map(|f| field_height(f)).collect();
    let focused = match focus {
        Focus::Field(name) => fields.iter().position(|f| &f.name == name),
        Focus::Button(_) => None,
    };
    let start = scroll_offset(&heights, focused, area.height);

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (idx, field) in fields.iter().enumerate().skip(start) {
        let height = heights[idx];
        if y + height > bottom {
            break;
        }
        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        draw_field(frame, field_area, field, focused == Some(idx));
        y += height;
    }
}
