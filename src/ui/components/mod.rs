//! Reusable UI components

mod alert;
mod button;

pub use alert::{render_alert, ALERT_HEIGHT};
pub use button::{render_button_row, BUTTON_HEIGHT};
