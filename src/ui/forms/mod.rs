//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `step_form`: The visible step and its fields
//! - `review`: Summary shown on the final step

mod field_renderer;
mod review;
mod step_form;

pub use step_form::draw_step;
