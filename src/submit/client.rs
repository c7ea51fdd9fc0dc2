//! Delivery implementations
//!
//! `HttpTransport` posts the field set as multipart/form-data to the
//! configured endpoint. `AlternateDelivery` stands in for a delivery channel that
//! does not exist yet and refuses every submission.

use super::{SubmissionTransport, SubmitError};
use crate::state::FormData;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart::Form;
use reqwest::Client;

/// HTTP POST delivery
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn submit(&self, data: &FormData) -> Result<(), SubmitError> {
        tracing::info!(endpoint = %self.endpoint, entries = data.len(), "Submitting form");

        // Repeated names stay repeated, one part per checked option
        let form = data
            .entries()
            .iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Endpoint rejected submission");
            return Err(SubmitError::Status(status.as_u16()));
        }

        // The body is optional and never inspected beyond logging
        match response.json::<serde_json::Value>().await {
            Ok(body) => tracing::debug!("Endpoint replied: {body}"),
            Err(e) => tracing::debug!("Endpoint reply was not JSON: {e}"),
        }

        Ok(())
    }
}

/// Placeholder for the alternate delivery mode
#[derive(Debug, Default)]
pub struct AlternateDelivery;

#[async_trait]
impl SubmissionTransport for AlternateDelivery {
    async fn submit(&self, _data: &FormData) -> Result<(), SubmitError> {
        Err(SubmitError::UnsupportedDelivery)
    }
}
