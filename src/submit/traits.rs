//! Trait abstraction for submission delivery to enable mocking in tests

use super::SubmitError;
use crate::state::FormData;
use async_trait::async_trait;

/// Delivers a completed form. Implementations make exactly one attempt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(&self, data: &FormData) -> Result<(), SubmitError>;
}
