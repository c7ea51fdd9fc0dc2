//! Form submission to the remote endpoint

mod client;
mod traits;

pub use client::{AlternateDelivery, HttpTransport};
pub use traits::SubmissionTransport;

#[cfg(test)]
pub use traits::MockSubmissionTransport;

use crate::config::WizardConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("endpoint answered with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("alternate delivery mode is not supported yet")]
    UnsupportedDelivery,
}

/// Pick the delivery path selected in the configuration
pub fn transport_from_config(config: &WizardConfig) -> Box<dyn SubmissionTransport> {
    if config.use_alternate_delivery {
        tracing::warn!("Alternate delivery is configured; submissions will be refused");
        Box::new(AlternateDelivery)
    } else {
        Box::new(HttpTransport::new(config.endpoint.clone()))
    }
}
