//! Wizard state module

mod alert;
mod draft;
mod forms;
mod review;
mod validation;
mod wizard;

pub use alert::*;
pub use forms::*;
pub use review::ReviewRow;
pub use wizard::*;
